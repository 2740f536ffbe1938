use endeks_core::Constituent;

pub fn rows() -> Vec<Constituent> {
    build(vec![
        ("PAYTM", "One 97 Communications", "Fintech", 412.0, 612.0, 312.0, 26_200.0, 9.4),
        ("ZOMATO", "Zomato Ltd", "Food Tech", 128.0, 142.0, 74.0, 110_500.0, 14.8),
        ("NYKAA", "FSN E-Commerce", "E-commerce", 156.0, 188.0, 114.0, 44_600.0, 6.1),
        ("POLICYBZR", "PB Fintech", "Fintech", 788.0, 842.0, 402.0, 35_400.0, 5.2),
        ("DELHIVERY", "Delhivery Ltd", "Logistics", 402.0, 448.0, 288.0, 29_500.0, 4.9),
        ("CARTRADE", "CarTrade Tech", "Auto Tech", 694.0, 742.0, 410.0, 3_200.0, 1.1),
        ("EASEMYTRIP", "Easy Trip Planners", "Travel Tech", 42.0, 54.0, 33.0, 7_400.0, 1.6),
        ("NAZARA", "Nazara Technologies", "Gaming", 882.0, 958.0, 512.0, 6_700.0, 1.3),
    ])
}

fn build(rows: Vec<(&str, &str, &str, f64, f64, f64, f64, f64)>) -> Vec<Constituent> {
    rows.into_iter()
        .map(
            |(ticker, name, sector, price, high_52w, low_52w, market_cap, weight_pct)| {
                Constituent {
                    ticker: ticker.to_string(),
                    name: name.to_string(),
                    sector: sector.to_string(),
                    price,
                    high_52w,
                    low_52w,
                    market_cap,
                    weight_pct,
                }
            },
        )
        .collect()
}
