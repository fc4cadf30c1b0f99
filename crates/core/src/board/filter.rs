//! Client-side filtering and sorting over the aggregated listing.

use rust_decimal::Decimal;

use coindeck_market_data::models::AssetQuote;

use super::board_model::{FilterMode, ListingQuery};

/// Filter and sort the aggregated listing for display.
///
/// The search term matches case-insensitively as a substring of the
/// name or symbol. `All` keeps the aggregator's order untouched;
/// `Gainers` and `Losers` keep only records with a reported, strictly
/// positive (resp. negative) 24h change and sort by it. Records with
/// no reported change never appear in either partition. An empty
/// result is a valid outcome, not an error.
pub fn filter_and_sort(assets: &[AssetQuote], query: &ListingQuery) -> Vec<AssetQuote> {
    let term = query.search.to_lowercase();

    let mut result: Vec<AssetQuote> = assets
        .iter()
        .filter(|quote| {
            term.is_empty()
                || quote.name.to_lowercase().contains(&term)
                || quote.symbol.to_lowercase().contains(&term)
        })
        .cloned()
        .collect();

    match query.mode {
        FilterMode::All => {}
        FilterMode::Gainers => {
            result.retain(|quote| {
                quote
                    .price_change_percent_24h
                    .is_some_and(|change| change > Decimal::ZERO)
            });
            result.sort_by(|a, b| b.price_change_percent_24h.cmp(&a.price_change_percent_24h));
        }
        FilterMode::Losers => {
            result.retain(|quote| {
                quote
                    .price_change_percent_24h
                    .is_some_and(|change| change < Decimal::ZERO)
            });
            result.sort_by(|a, b| a.price_change_percent_24h.cmp(&b.price_change_percent_24h));
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use coindeck_market_data::models::QuoteSource;
    use rust_decimal_macros::dec;

    fn quote(id: &str, name: &str, symbol: &str, change: Option<Decimal>) -> AssetQuote {
        AssetQuote {
            id: id.to_string(),
            symbol: symbol.to_string(),
            name: name.to_string(),
            image_url: String::new(),
            current_price: dec!(1),
            market_cap: Decimal::ZERO,
            market_cap_rank: 0,
            price_change_percent_24h: change,
            high_24h: Decimal::ZERO,
            low_24h: Decimal::ZERO,
            total_volume: Decimal::ZERO,
            circulating_supply: Decimal::ZERO,
            source: QuoteSource::Coingecko,
        }
    }

    fn sample_board() -> Vec<AssetQuote> {
        vec![
            quote("bitcoin", "Bitcoin", "btc", Some(dec!(5))),
            quote("ethereum", "Ethereum", "eth", Some(dec!(-3))),
            quote("tether", "Tether", "usdt", None),
            quote("solana", "Solana", "sol", Some(dec!(-10))),
        ]
    }

    fn query(search: &str, mode: FilterMode) -> ListingQuery {
        ListingQuery {
            search: search.to_string(),
            mode,
        }
    }

    fn ids(assets: &[AssetQuote]) -> Vec<&str> {
        assets.iter().map(|quote| quote.id.as_str()).collect()
    }

    #[test]
    fn test_all_preserves_aggregation_order() {
        let board = sample_board();
        let result = filter_and_sort(&board, &query("", FilterMode::All));
        assert_eq!(ids(&result), vec!["bitcoin", "ethereum", "tether", "solana"]);
    }

    #[test]
    fn test_search_matches_name_and_symbol_case_insensitively() {
        let board = sample_board();

        let by_name = filter_and_sort(&board, &query("BITC", FilterMode::All));
        assert_eq!(ids(&by_name), vec!["bitcoin"]);

        let by_symbol = filter_and_sort(&board, &query("usdt", FilterMode::All));
        assert_eq!(ids(&by_symbol), vec!["tether"]);
    }

    #[test]
    fn test_search_with_no_match_is_a_valid_empty_result() {
        let board = sample_board();
        let result = filter_and_sort(&board, &query("dogecoin", FilterMode::All));
        assert!(result.is_empty());
    }

    #[test]
    fn test_gainers_keeps_positive_change_sorted_descending() {
        let mut board = sample_board();
        board.push(quote("cardano", "Cardano", "ada", Some(dec!(8))));

        let result = filter_and_sort(&board, &query("", FilterMode::Gainers));
        assert_eq!(ids(&result), vec!["cardano", "bitcoin"]);
    }

    #[test]
    fn test_losers_keeps_negative_change_sorted_ascending() {
        let board = sample_board();
        let result = filter_and_sort(&board, &query("", FilterMode::Losers));
        assert_eq!(ids(&result), vec!["solana", "ethereum"]);
    }

    #[test]
    fn test_absent_change_is_excluded_from_both_partitions() {
        let board = sample_board();

        let gainers = filter_and_sort(&board, &query("", FilterMode::Gainers));
        let losers = filter_and_sort(&board, &query("", FilterMode::Losers));

        assert!(gainers.iter().all(|quote| quote.id != "tether"));
        assert!(losers.iter().all(|quote| quote.id != "tether"));
    }

    #[test]
    fn test_partitions_are_disjoint_and_rebuild_the_full_set() {
        let board = sample_board();

        let all = filter_and_sort(&board, &query("", FilterMode::All));
        let gainers = filter_and_sort(&board, &query("", FilterMode::Gainers));
        let losers = filter_and_sort(&board, &query("", FilterMode::Losers));

        for gainer in &gainers {
            assert!(losers.iter().all(|loser| loser.id != gainer.id));
        }

        let absent: Vec<&AssetQuote> = all
            .iter()
            .filter(|quote| quote.price_change_percent_24h.is_none())
            .collect();
        assert_eq!(gainers.len() + losers.len() + absent.len(), all.len());
    }

    #[test]
    fn test_filter_and_sort_is_idempotent() {
        let board = sample_board();
        let q = query("", FilterMode::Losers);

        let once = filter_and_sort(&board, &q);
        let twice = filter_and_sort(&once, &q);

        assert_eq!(ids(&once), ids(&twice));
    }
}
