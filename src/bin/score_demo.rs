//! Demo that assesses a few sample listings and prints each assessment as JSON.

use listing_risk::{init_tracing, ListingInput, RiskEngine};

fn main() -> anyhow::Result<()> {
    // Load .env in local/dev; picks up RISK_CONFIG_PATH / RISK_GAP_CAP / RISK_BLEND_WEIGHT.
    let _ = dotenvy::dotenv();
    init_tracing();

    let engine = RiskEngine::from_default_config()?;
    tracing::info!(config = ?engine.config(), "risk engine ready");

    let samples = [
        ListingInput::default()
            .with_text("Nhà mặt tiền Quận 1, sổ hồng riêng, chính chủ, không quy hoạch")
            .with_prices(420.0, 380.0)
            .with_fake_prob(8.0),
        ListingInput::default()
            .with_text("Bán gấp, giấy tay, đang tranh chấp, giá rẻ bất ngờ")
            .with_gap(0.35)
            .with_fake_prob(0.72),
        ListingInput::default()
            .with_text("Mặt tiền Quận 5, pháp lý chuẩn")
            .with_gap(100.0)
            .with_fake_prob(0.9),
        ListingInput::default(),
    ];

    for s in &samples {
        let a = engine.assess(s);
        println!("{}", serde_json::to_string_pretty(&a)?);
    }

    println!("score-demo done");
    Ok(())
}
