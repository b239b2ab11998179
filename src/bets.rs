use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// A binary-outcome prediction market entry. Yes/No prices are per-share
/// dollar amounts and need not sum to 1; the percents are implied
/// probabilities and need not sum to 100.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bet {
    pub bet_id: String,
    pub bet_name: String,
    pub bet_image_link: Option<String>,
    pub yes_value: Decimal,
    pub no_value: Decimal,
    pub yes_percent: Decimal,
    pub no_percent: Decimal,
    pub rules: String,
    pub category: String,
}

pub const BET_CATEGORIES: [&str; 4] = ["Crypto", "Politics", "Sports", "Other"];

/// Ordered category labels for filters and section headers.
pub fn bet_categories() -> Vec<String> {
    BET_CATEGORIES.iter().map(|c| c.to_string()).collect()
}

/// Hardcoded catalog for the dashboard. Replace with a Kalshi/Polymarket
/// client once a live backend exists; until then the catalog is immutable
/// for the session.
pub fn available_bets() -> Vec<Bet> {
    vec![
        Bet {
            bet_id: "btc-100k".to_string(),
            bet_name: "Will Bitcoin hit $100k?".to_string(),
            bet_image_link: Some(
                "https://upload.wikimedia.org/wikipedia/commons/thumb/4/46/Bitcoin.svg/240px-Bitcoin.svg.png"
                    .to_string(),
            ),
            yes_value: dec!(0.72),
            no_value: dec!(0.28),
            yes_percent: dec!(72),
            no_percent: dec!(28),
            rules: "Resolves YES if Bitcoin closes above $100,000 USD on any major exchange before Dec 31 2026."
                .to_string(),
            category: "Crypto".to_string(),
        },
        Bet {
            bet_id: "eth-flip-btc".to_string(),
            bet_name: "Will ETH flip BTC?".to_string(),
            bet_image_link: Some("https://example.com/eth.png".to_string()),
            yes_value: dec!(0.30),
            no_value: dec!(0.70),
            yes_percent: dec!(30),
            no_percent: dec!(70),
            rules: "Resolves YES if ETH market cap exceeds BTC before 2026.".to_string(),
            category: "Crypto".to_string(),
        },
        Bet {
            bet_id: "us-turnout-2028".to_string(),
            bet_name: "Will 2028 US presidential turnout exceed 65%?".to_string(),
            bet_image_link: None,
            yes_value: dec!(0.41),
            no_value: dec!(0.59),
            yes_percent: dec!(41),
            no_percent: dec!(59),
            rules: "Resolves YES if certified national turnout among eligible voters exceeds 65%."
                .to_string(),
            category: "Politics".to_string(),
        },
        Bet {
            bet_id: "wc-host-wins".to_string(),
            bet_name: "Will the host nation reach the World Cup semifinals?".to_string(),
            bet_image_link: None,
            yes_value: dec!(0.18),
            no_value: dec!(0.82),
            yes_percent: dec!(18),
            no_percent: dec!(82),
            rules: "Resolves YES if the tournament host reaches the semifinal round.".to_string(),
            category: "Sports".to_string(),
        },
        Bet {
            bet_id: "agi-2030".to_string(),
            bet_name: "Will a major lab declare AGI before 2030?".to_string(),
            bet_image_link: None,
            yes_value: dec!(0.22),
            no_value: dec!(0.78),
            yes_percent: dec!(22),
            no_percent: dec!(78),
            rules: "Resolves YES on an official AGI declaration by a major AI lab before Jan 1 2030."
                .to_string(),
            category: "Other".to_string(),
        },
    ]
}
