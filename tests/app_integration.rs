use chrono::{TimeDelta, Utc};
use moneyview::core::page::{PageAction, PageController};
use moneyview::core::session::PageSession;
use moneyview::core::{IndexCategory, Interval};
use moneyview::providers::google_finance::GoogleFinanceScraper;
use moneyview::store::csv::CsvLoader;
use moneyview::{AppCommand, PageArgs};
use std::fs;
use std::time::Duration;
use tempfile::TempDir;
use tracing::info;

// Adds automatic logging to test
mod test_utils {
    use std::fs;
    use tempfile::{NamedTempFile, TempDir};
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    pub fn quote_html(price: &str, previous_close: &str) -> String {
        format!(
            r#"<html><body>
            <div class="YMlKec fxKbKc">{price}</div>
            <div class="P6K39c">{previous_close}</div>
            <div class="P6K39c">9.00 - 11.00</div>
            <div class="P6K39c">5.00 - 15.00</div>
            </body></html>"#
        )
    }

    pub async fn create_mock_server(quote_path: &str, body: String) -> MockServer {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(quote_path))
            .respond_with(ResponseTemplate::new(200).set_body_string(body))
            .mount(&mock_server)
            .await;
        mock_server
    }

    /// A data directory with a three-row SENSEX series.
    pub fn create_data_dir() -> TempDir {
        let dir = TempDir::new().expect("Failed to create data dir");
        fs::write(
            dir.path().join("SENSEX.csv"),
            "Date,Close,Volume\n\
             01/01/2023 00:00:00,10,100\n\
             02/01/2023 00:00:00,20,200\n\
             03/01/2023 00:00:00,30,300\n",
        )
        .expect("Failed to write data file");
        dir
    }

    pub fn create_config(base_url: &str, data_dir: &TempDir) -> NamedTempFile {
        let config_file = NamedTempFile::new().expect("Failed to create temp file");
        let config_content = format!(
            r#"
        data_path: "{}"
        providers:
          google:
            base_url: "{}"
        refresh_secs: 10
        http_timeout_secs: 2
    "#,
            data_dir.path().display(),
            base_url
        );
        fs::write(config_file.path(), config_content).expect("Failed to write config file");
        config_file
    }
}

fn india_page(asset: Option<&str>, interval: Interval) -> PageArgs {
    PageArgs {
        category: IndexCategory::India,
        asset: asset.map(str::to_string),
        interval,
    }
}

#[test_log::test(tokio::test)]
async fn test_page_flow_with_mock_quotes() {
    let mock_server = test_utils::create_mock_server(
        "/finance/quote/SENSEX:INDEXBOM",
        test_utils::quote_html("₹100.00", "₹90.00"),
    )
    .await;
    let data_dir = test_utils::create_data_dir();

    let loader = CsvLoader::new(data_dir.path());
    let scraper = GoogleFinanceScraper::new(Duration::from_secs(2)).unwrap();
    let base_url = mock_server.uri();
    let controller = PageController::new(&loader, &scraper, &base_url, Duration::from_secs(10));

    let start = Utc::now();
    let mut session = PageSession::new(IndexCategory::India, start);
    let view = controller
        .render(&mut session, PageAction::Refresh, start)
        .await;
    info!(messages = ?view.messages, "Rendered India page");

    let sensex = &view.metrics[0];
    assert_eq!(sensex.name, "SENSEX");
    assert_eq!(sensex.quote.price, Some(100.0));
    assert_eq!(sensex.quote.change_abs, Some(10.0));
    assert_eq!(sensex.quote.change_pct, Some(10.0));

    // The NIFTY pages are not mocked: each fails on its own.
    assert_eq!(view.messages.len(), 3);
    assert!(view.messages.iter().all(|m| m.contains("HTTP error: 404")));
    assert_eq!(view.metrics[1].quote.price, Some(0.0));

    let trace = view.chart.as_ref().unwrap().trace().unwrap().clone();
    assert_eq!(trace.y, vec![20.0]);
    assert_eq!(view.info.details[0], ("Previous close", Some("₹90.00".to_string())));

    // Switching the interval inside the refresh period re-uses the held quotes.
    let view = controller
        .render(
            &mut session,
            PageAction::SetInterval(Interval::Month),
            start + TimeDelta::seconds(3),
        )
        .await;
    assert!(!view.refreshed);
    assert_eq!(view.metrics[0].quote.price, Some(100.0));
    assert_eq!(view.chart.unwrap().trace().unwrap().y, vec![10.0, 20.0, 30.0]);
}

#[test_log::test(tokio::test)]
async fn test_show_command_with_mock() {
    let mock_server = test_utils::create_mock_server(
        "/finance/quote/SENSEX:INDEXBOM",
        test_utils::quote_html("100", "90"),
    )
    .await;
    let data_dir = test_utils::create_data_dir();
    let config_file = test_utils::create_config(&mock_server.uri(), &data_dir);

    let result = moneyview::run_command(
        AppCommand::Show(india_page(None, Interval::Year)),
        Some(config_file.path().to_str().unwrap()),
    )
    .await;
    assert!(
        result.is_ok(),
        "Show command failed with: {:?}",
        result.err()
    );
}

#[test_log::test(tokio::test)]
async fn test_watch_command_stops_after_passes() {
    let mock_server = test_utils::create_mock_server(
        "/finance/quote/SENSEX:INDEXBOM",
        test_utils::quote_html("100", "90"),
    )
    .await;
    let data_dir = test_utils::create_data_dir();
    let config_file = test_utils::create_config(&mock_server.uri(), &data_dir);

    let result = moneyview::run_command(
        AppCommand::Watch {
            page: india_page(Some("SENSEX"), Interval::Day),
            passes: Some(1),
        },
        Some(config_file.path().to_str().unwrap()),
    )
    .await;
    assert!(result.is_ok(), "Watch failed with: {:?}", result.err());
}

#[test_log::test(tokio::test)]
async fn test_show_unknown_asset_fails() {
    let data_dir = test_utils::create_data_dir();
    let config_file = test_utils::create_config("http://127.0.0.1:9", &data_dir);

    let err = moneyview::run_command(
        AppCommand::Show(india_page(Some("NIKKEI"), Interval::Year)),
        Some(config_file.path().to_str().unwrap()),
    )
    .await
    .unwrap_err();
    assert_eq!(
        err.to_string(),
        "Configuration error: NIKKEI not found in the India catalog"
    );
}

#[test_log::test(tokio::test)]
async fn test_chart_command_writes_yearly_mean() {
    let data_dir = test_utils::create_data_dir();
    let config_file = test_utils::create_config("http://127.0.0.1:9", &data_dir);
    let out_dir = TempDir::new().unwrap();
    let chart_path = out_dir.path().join("sensex.json");

    moneyview::run_command(
        AppCommand::Chart {
            page: india_page(Some("SENSEX"), Interval::Year),
            output: Some(chart_path.clone()),
        },
        Some(config_file.path().to_str().unwrap()),
    )
    .await
    .unwrap();

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&chart_path).unwrap()).unwrap();
    assert_eq!(json["data"][0]["x"], serde_json::json!(["2023-01-01"]));
    assert_eq!(json["data"][0]["y"], serde_json::json!([20.0]));
    assert_eq!(json["layout"]["xaxis"]["title"]["text"], "Year");
    assert_eq!(json["layout"]["yaxis"]["title"]["text"], "Price");
}

#[test_log::test(tokio::test)]
async fn test_download_command_is_byte_identical() {
    let data_dir = test_utils::create_data_dir();
    let config_file = test_utils::create_config("http://127.0.0.1:9", &data_dir);
    let out_dir = TempDir::new().unwrap();
    let target = out_dir.path().join("copy.csv");

    moneyview::run_command(
        AppCommand::Download {
            category: IndexCategory::India,
            asset: "sensex".to_string(),
            output: Some(target.clone()),
        },
        Some(config_file.path().to_str().unwrap()),
    )
    .await
    .unwrap();

    assert_eq!(
        fs::read(target).unwrap(),
        fs::read(data_dir.path().join("SENSEX.csv")).unwrap()
    );
}

#[test_log::test(tokio::test)]
async fn test_chart_command_missing_file_fails() {
    let data_dir = test_utils::create_data_dir();
    let config_file = test_utils::create_config("http://127.0.0.1:9", &data_dir);

    let err = moneyview::run_command(
        AppCommand::Chart {
            page: india_page(Some("NIFTY 50"), Interval::Year),
            output: None,
        },
        Some(config_file.path().to_str().unwrap()),
    )
    .await
    .unwrap_err();
    assert!(err.to_string().starts_with("File not found"));
}

#[test_log::test(tokio::test)]
async fn test_catalog_command() {
    let data_dir = test_utils::create_data_dir();
    let config_file = test_utils::create_config("http://127.0.0.1:9", &data_dir);

    let result =
        moneyview::run_command(AppCommand::Catalog, Some(config_file.path().to_str().unwrap()))
            .await;
    assert!(result.is_ok());
}
