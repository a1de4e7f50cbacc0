use anyhow::Context;

use clearlabel_ai::{StubScoringService, TimeoutScoring};
use clearlabel_analytics::{ProductFilter, StatusFilter};
use clearlabel_app::{AppConfig, DashboardContext, Page, UserSettings, replay_draft, views};
use clearlabel_observability::LogFormat;
use clearlabel_products::ProductDraft;

const ENV_LOG_FORMAT: &str = "CLEARLABEL_LOG_FORMAT";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let log_format = std::env::var(ENV_LOG_FORMAT)
        .ok()
        .and_then(|v| LogFormat::parse(&v))
        .unwrap_or_default();
    clearlabel_observability::init(log_format);

    let config = AppConfig::from_env()?;
    let ctx = DashboardContext::from_config(&config).context("failed to load product fixture")?;

    let mut args = std::env::args().skip(1);
    let page: Page = args.next().as_deref().unwrap_or("dashboard").parse()?;
    tracing::debug!(page = page.label(), route = page.route(), "rendering page");

    let output = match page {
        Page::Dashboard => serde_json::to_string_pretty(&views::dashboard(&ctx))?,
        Page::Analytics => serde_json::to_string_pretty(&views::analytics(&ctx))?,
        Page::Products => {
            let query = args.next().unwrap_or_default();
            let status: StatusFilter = match args.next() {
                Some(raw) => raw.parse()?,
                None => StatusFilter::All,
            };
            let filter = ProductFilter::default().with_query(query).with_status(status);
            serde_json::to_string_pretty(&views::products(&ctx, &filter))?
        }
        Page::AddProduct => {
            let path = args
                .next()
                .context("usage: clearlabel add-product <draft.json>")?;
            let raw = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read draft {path}"))?;
            let draft: ProductDraft =
                serde_json::from_str(&raw).with_context(|| format!("malformed draft {path}"))?;

            let scorer = TimeoutScoring::new(
                StubScoringService::new().with_delay(config.scoring_delay),
                config.scoring_timeout,
            );
            let wizard = replay_draft(&draft, &scorer).await?;
            serde_json::to_string_pretty(&views::add_product(&ctx, &wizard))?
        }
        Page::Settings => {
            let settings = UserSettings::default().with_theme(ctx.theme());
            serde_json::to_string_pretty(&views::settings(&ctx, &settings))?
        }
    };

    println!("{output}");
    Ok(())
}
