use chrono::NaiveDate;
use endeks_core::IpoListing;

pub fn listings() -> Vec<IpoListing> {
    build(vec![
        ("Zepto", "Quick Commerce", "2024-03-15", 310.0, 360.0, 4_500.0, Some("Goldman Sachs")),
        ("Swiggy", "Food Delivery", "2024-04-02", 350.0, 390.0, 10_400.0, Some("Kotak")),
        ("PhonePe", "Fintech", "2024-05-20", 420.0, 470.0, 12_000.0, None),
        ("Ather Energy", "EV Mfg", "2024-04-22", 280.0, 321.0, 3_100.0, Some("JM Financial")),
        ("Pine Labs", "Fintech", "2024-06-10", 510.0, 560.0, 5_600.0, None),
        ("Lenskart", "E-commerce", "2024-05-06", 390.0, 430.0, 7_300.0, Some("Morgan Stanley")),
        ("Dream11", "Gaming", "2024-06-24", 640.0, 700.0, 8_900.0, None),
        ("OfBusiness", "B2B E-comm", "2024-07-08", 470.0, 520.0, 6_100.0, Some("Axis Capital")),
    ])
}

fn build(rows: Vec<(&str, &str, &str, f64, f64, f64, Option<&str>)>) -> Vec<IpoListing> {
    rows.into_iter()
        .filter_map(
            |(name, sector, date, price_band_low, price_band_high, issue_size, lead)| {
                let expected_date = NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()?;
                Some(IpoListing {
                    name: name.to_string(),
                    sector: sector.to_string(),
                    expected_date,
                    price_band_low,
                    price_band_high,
                    issue_size,
                    // The dashboard's rule of thumb: valuation at five times
                    // the issue size until bankers publish a number.
                    est_valuation: issue_size * 5.0,
                    lead_manager: lead.map(str::to_string),
                })
            },
        )
        .collect()
}
