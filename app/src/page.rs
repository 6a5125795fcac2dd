//! Landing page rendering.
//!
//! The page is static marketing content plus the purchase form shell; all
//! wallet interaction happens client-side against the collaborators, so
//! nothing here branches on wallet state.

use presale_common::{
    config::{
        ALLOCATION_BOOSTS, CHAIN_LINE, DISTRIBUTION_LINE, FOOTER_LABEL, FOOTER_URL, PAGE_TITLE,
        PRESALE_WINDOW_LINE, PRESET_AMOUNTS, PURCHASE_ADDRESS, SEND_WARNING_LINE, TICKER,
        TOTAL_SUPPLY_LINE, TRADING_LINE,
    },
    frame::PageMetadata,
};

/// Render the single presale landing page
pub fn render_page(metadata: &PageMetadata) -> String {
    let boosts: String = ALLOCATION_BOOSTS
        .iter()
        .map(|boost| format!("        <li>{}</li>\n", boost))
        .collect();
    let presets: String = PRESET_AMOUNTS
        .iter()
        .map(|preset| {
            format!(
                "        <button type=\"button\" data-preset=\"{preset}\">{preset} ETH</button>\n"
            )
        })
        .collect();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
{head}</head>
<body>
  <header>
    <h1>{title}</h1>
    <div id="wallet-slot"></div>
  </header>
  <section id="presale-info">
    <h2>Ticker: {ticker}</h2>
    <h2>Chain: {chain}</h2>
    <h2>Total supply: {supply} <span>(my exact IRS bill)</span></h2>
    <h2>Presale window: {window}</h2>
    <h2>Distribution: {distribution}</h2>
    <h2>Trading: {trading}</h2>
    <h3>Boost your allocation (+2% each):</h3>
    <ul>
{boosts}    </ul>
  </section>
  <section id="purchase">
    <h2>ETH Purchase Address</h2>
    <div>
      <input type="text" value="{address}" readonly>
      <button type="button" id="copy-address">Copy</button>
    </div>
    <p>{warning}</p>
    <label for="amount">Amount in ETH</label>
    <input type="number" id="amount" placeholder="0.00">
    <div id="presets">
{presets}    </div>
    <button type="button" id="purchase-button" disabled>Purchase</button>
    <p id="status"></p>
  </section>
  <footer>
    <a href="{footer_url}">{footer_label}</a>
  </footer>
</body>
</html>
"#,
        head = metadata.render_head(),
        title = PAGE_TITLE,
        ticker = TICKER,
        chain = CHAIN_LINE,
        supply = TOTAL_SUPPLY_LINE,
        window = PRESALE_WINDOW_LINE,
        distribution = DISTRIBUTION_LINE,
        trading = TRADING_LINE,
        boosts = boosts,
        address = PURCHASE_ADDRESS,
        warning = SEND_WARNING_LINE,
        presets = presets,
        footer_url = FOOTER_URL,
        footer_label = FOOTER_LABEL,
    )
}
