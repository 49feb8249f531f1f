//! Static asset catalogs, one per dashboard category.

use crate::core::error::DashboardError;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum IndexCategory {
    India,
    Us,
    Europe,
    Currency,
    Crypto,
    Futures,
    Stock,
}

impl Display for IndexCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                IndexCategory::India => "India",
                IndexCategory::Us => "USA",
                IndexCategory::Europe => "Europe",
                IndexCategory::Currency => "Currencies",
                IndexCategory::Crypto => "Crypto",
                IndexCategory::Futures => "Futures",
                IndexCategory::Stock => "Stocks",
            }
        )
    }
}

impl FromStr for IndexCategory {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "india" => Ok(IndexCategory::India),
            "us" | "usa" => Ok(IndexCategory::Us),
            "europe" => Ok(IndexCategory::Europe),
            "currency" | "currencies" => Ok(IndexCategory::Currency),
            "crypto" => Ok(IndexCategory::Crypto),
            "futures" => Ok(IndexCategory::Futures),
            "stock" | "stocks" => Ok(IndexCategory::Stock),
            _ => Err(DashboardError::Config(format!("Unknown category: {s}"))),
        }
    }
}

impl IndexCategory {
    pub fn all() -> [IndexCategory; 7] {
        [
            IndexCategory::India,
            IndexCategory::Us,
            IndexCategory::Europe,
            IndexCategory::Currency,
            IndexCategory::Crypto,
            IndexCategory::Futures,
            IndexCategory::Stock,
        ]
    }

    pub fn catalog(&self) -> AssetCatalog {
        let entries = match self {
            IndexCategory::India => INDIA,
            IndexCategory::Us => US,
            IndexCategory::Europe => EUROPE,
            IndexCategory::Currency => CURRENCY,
            IndexCategory::Crypto => CRYPTO,
            IndexCategory::Futures => FUTURES,
            IndexCategory::Stock => STOCK,
        };
        AssetCatalog {
            category: *self,
            entries,
        }
    }

    /// Labels for the detail values scraped from a quote page, in page order.
    pub fn detail_labels(&self) -> &'static [&'static str] {
        match self {
            IndexCategory::Futures => &[
                "Previous close",
                "Day range",
                "Volume",
                "Primary Exchange",
                "Market Segment",
                "Open Interest",
                "Settlement Price",
            ],
            IndexCategory::Stock => &[
                "Previous close",
                "Day range",
                "Year range",
                "Market cap",
                "Average volume",
                "P/E ratio",
                "Dividend yield",
                "Primary Exchange",
            ],
            _ => &["Previous close", "Day range", "Year range"],
        }
    }

    /// Company facts listed further down a stock's quote page, by detail position.
    pub fn company_fact_labels(&self) -> &'static [(usize, &'static str)] {
        match self {
            IndexCategory::Stock => &[(9, "CEO"), (10, "Founded"), (12, "Employees")],
            _ => &[],
        }
    }

    /// Prefix applied to metric values.
    pub fn value_prefix(&self) -> &'static str {
        match self {
            IndexCategory::Futures => "$ ",
            _ => "",
        }
    }

    /// Number of most recent raw rows shown beneath the chart, if any.
    pub fn recent_rows(&self) -> Option<usize> {
        match self {
            IndexCategory::Futures => Some(4),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssetEntry {
    pub name: &'static str,
    pub csv_name: &'static str,
    pub quote_path: &'static str,
    pub about: &'static str,
}

impl AssetEntry {
    pub fn quote_url(&self, base_url: &str) -> String {
        format!("{}{}", base_url.trim_end_matches('/'), self.quote_path)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct AssetCatalog {
    pub category: IndexCategory,
    entries: &'static [AssetEntry],
}

impl AssetCatalog {
    pub fn entries(&self) -> &'static [AssetEntry] {
        self.entries
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> {
        self.entries.iter().map(|e| e.name)
    }

    /// The asset selected when a session starts.
    pub fn first(&self) -> Option<&'static AssetEntry> {
        self.entries.first()
    }

    pub fn lookup(&self, name: &str) -> Result<&'static AssetEntry, DashboardError> {
        self.entries
            .iter()
            .find(|e| e.name.eq_ignore_ascii_case(name.trim()))
            .ok_or_else(|| {
                DashboardError::Config(format!(
                    "{} not found in the {} catalog",
                    name, self.category
                ))
            })
    }
}

const INDIA: &[AssetEntry] = &[
    AssetEntry {
        name: "SENSEX",
        csv_name: "SENSEX",
        quote_path: "/finance/quote/SENSEX:INDEXBOM",
        about: "The SENSEX tracks 30 of the largest and most actively traded stocks on the \
                Bombay Stock Exchange. Introduced in 1986, it is one of the oldest benchmarks \
                of the Indian equity market and spans most sectors of the economy.",
    },
    AssetEntry {
        name: "NIFTY 50",
        csv_name: "NIFTY 50",
        quote_path: "/finance/quote/NIFTY_50:INDEXNSE",
        about: "The NIFTY 50 represents the 50 largest and most liquid Indian companies listed \
                on the National Stock Exchange. It is the most widely followed gauge of Indian \
                equities and covers a diversified set of sectors.",
    },
    AssetEntry {
        name: "NIFTY BANK",
        csv_name: "NIFTY BANK",
        quote_path: "/finance/quote/NIFTY_BANK:INDEXNSE",
        about: "The NIFTY Bank index tracks the most liquid large-cap banking stocks on the \
                National Stock Exchange and is used to gauge the health of the Indian banking \
                sector.",
    },
    AssetEntry {
        name: "NIFTY IT",
        csv_name: "NIFTY IT",
        quote_path: "/finance/quote/NIFTY_IT:INDEXNSE",
        about: "The NIFTY IT index follows the large-cap information technology companies listed \
                on the National Stock Exchange and reflects the performance of India's software \
                and services industry.",
    },
];

const US: &[AssetEntry] = &[
    AssetEntry {
        name: "DOW Jones",
        csv_name: "DOW Jones",
        quote_path: "/finance/quote/.DJI:INDEXDJX",
        about: "The Dow Jones Industrial Average is a price-weighted index of 30 prominent \
                companies listed in the United States and one of the oldest stock market \
                benchmarks in the world.",
    },
    AssetEntry {
        name: "S&P 500",
        csv_name: "S&P 500",
        quote_path: "/finance/quote/.INX:INDEXSP",
        about: "The S&P 500 tracks 500 of the largest publicly traded companies in the United \
                States and is the most common benchmark for the broad US equity market.",
    },
    AssetEntry {
        name: "NASDAQ",
        csv_name: "NASDAQ",
        quote_path: "/finance/quote/.IXIC:INDEXNASDAQ",
        about: "The NASDAQ Composite includes nearly every stock listed on the Nasdaq exchange \
                and is heavily weighted towards technology companies.",
    },
    AssetEntry {
        name: "Russell 2000",
        csv_name: "Russell 2000",
        quote_path: "/finance/quote/RUT:INDEXRUSSELL",
        about: "The Russell 2000 measures the performance of roughly 2,000 small-cap US \
                companies and is the standard benchmark for smaller American businesses.",
    },
];

const EUROPE: &[AssetEntry] = &[
    AssetEntry {
        name: "DAX",
        csv_name: "DAX",
        quote_path: "/finance/quote/DAX:INDEXDB",
        about: "The DAX tracks 40 major German blue-chip companies trading on the Frankfurt \
                Stock Exchange.",
    },
    AssetEntry {
        name: "FTSE 100",
        csv_name: "FTSE 100",
        quote_path: "/finance/quote/UKX:INDEXFTSE",
        about: "The FTSE 100 is made up of the 100 largest companies by market capitalisation \
                listed on the London Stock Exchange.",
    },
    AssetEntry {
        name: "CAC 40",
        csv_name: "CAC 40",
        quote_path: "/finance/quote/PX1:INDEXEURO",
        about: "The CAC 40 represents 40 of the most significant stocks listed on Euronext \
                Paris and is the benchmark of the French equity market.",
    },
    AssetEntry {
        name: "IBEX 35",
        csv_name: "IBEX 35",
        quote_path: "/finance/quote/INDI:INDEXBME",
        about: "The IBEX 35 is the benchmark index of the Bolsa de Madrid, composed of the 35 \
                most liquid Spanish stocks.",
    },
];

const CURRENCY: &[AssetEntry] = &[
    AssetEntry {
        name: "USD/INR",
        csv_name: "USD/INR",
        quote_path: "/finance/quote/USD-INR",
        about: "Exchange rate between the US dollar and the Indian rupee: the number of rupees \
                needed to buy one dollar.",
    },
    AssetEntry {
        name: "EUR/INR",
        csv_name: "EUR/INR",
        quote_path: "/finance/quote/EUR-INR",
        about: "Exchange rate between the euro and the Indian rupee: the number of rupees \
                needed to buy one euro.",
    },
    AssetEntry {
        name: "GBP/INR",
        csv_name: "GBP/INR",
        quote_path: "/finance/quote/GBP-INR",
        about: "Exchange rate between the British pound and the Indian rupee: the number of \
                rupees needed to buy one pound.",
    },
    AssetEntry {
        name: "AUD/INR",
        csv_name: "AUD/INR",
        quote_path: "/finance/quote/AUD-INR",
        about: "Exchange rate between the Australian dollar and the Indian rupee: the number of \
                rupees needed to buy one Australian dollar.",
    },
];

const CRYPTO: &[AssetEntry] = &[
    AssetEntry {
        name: "Bitcoin",
        csv_name: "Bitcoin",
        quote_path: "/finance/quote/BTC-INR",
        about: "Bitcoin is the first decentralised cryptocurrency, launched in 2009 and secured \
                by a proof-of-work blockchain. Its supply is capped at 21 million coins.",
    },
    AssetEntry {
        name: "Ethereum",
        csv_name: "Ethereum",
        quote_path: "/finance/quote/ETH-INR",
        about: "Ethereum is a programmable blockchain whose native currency, ether, pays for the \
                execution of smart contracts and decentralised applications.",
    },
    AssetEntry {
        name: "Cardano",
        csv_name: "Cardano",
        quote_path: "/finance/quote/ADA-INR",
        about: "Cardano is a proof-of-stake blockchain platform; ADA is its native token.",
    },
    AssetEntry {
        name: "Dogecoin",
        csv_name: "Dogecoin",
        quote_path: "/finance/quote/DOGE-INR",
        about: "Dogecoin started in 2013 as a light-hearted fork of Litecoin and grew into one \
                of the most widely held cryptocurrencies.",
    },
];

const FUTURES: &[AssetEntry] = &[
    AssetEntry {
        name: "DOW Futures",
        csv_name: "DOW Futures",
        quote_path: "/finance/quote/YMW00:CBOT",
        about: "Dow futures are contracts on the future value of the Dow Jones Industrial \
                Average. Traders use them to hedge or speculate on the 30 large US companies in \
                the index, including outside regular market hours.",
    },
    AssetEntry {
        name: "S&P Futures",
        csv_name: "S&P Futures",
        quote_path: "/finance/quote/ESW00:CME_EMINIS",
        about: "S&P futures are contracts on the future value of the S&P 500 index and a common \
                tool for managing exposure to the broad US stock market.",
    },
    AssetEntry {
        name: "NASDAQ Futures",
        csv_name: "NASDAQ Futures",
        quote_path: "/finance/quote/NQW00:CME_EMINIS",
        about: "NASDAQ futures are contracts on the future value of the NASDAQ-100 index, which \
                is dominated by large technology companies.",
    },
    AssetEntry {
        name: "Gold",
        csv_name: "Gold",
        quote_path: "/finance/quote/GCW00:COMEX",
        about: "Gold futures are standardised contracts to buy or sell gold at a set price on a \
                future date, widely used to hedge against inflation and currency swings.",
    },
];

const STOCK: &[AssetEntry] = &[AssetEntry {
    name: "TCS",
    csv_name: "TCS",
    quote_path: "/finance/quote/TCS:NSE",
    about: "Tata Consultancy Services is a global IT services, consulting and business \
            solutions company headquartered in Mumbai. Part of the Tata Group and founded in \
            1968, it serves clients across most industries.",
}];
