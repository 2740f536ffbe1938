mod common;
use common::get_connector;
use endeks::Endeks;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let connector = get_connector();
    let engine = Endeks::builder().connector(connector).build()?;

    // Upcoming listings first, then constituents.
    for card in engine.cards().await? {
        println!("{} [{}]", card.name(), card.tag());
        for (label, value) in card.rows() {
            println!("    {label:>14}: {value}");
        }
    }

    Ok(())
}
