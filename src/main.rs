// Entry point: terminal setup and teardown around the app event loop.

use tuido::api::ApiClient;
use tuido::app::App;
use tuido::error::Result;

#[tokio::main]
async fn main() -> Result<()> {
    let client = ApiClient::from_env()?;

    let mut terminal = ratatui::init();
    let result = App::new(client).run(&mut terminal).await;
    ratatui::restore();
    result
}
