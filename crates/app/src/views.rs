//! Page view models. Each is a plain serializable snapshot tagged with the
//! page and the theme hint.

use core::str::FromStr;

use serde::Serialize;

use clearlabel_ai::ReviewResult;
use clearlabel_analytics::{AnalyticsReport, DashboardSummary, ProductFilter};
use clearlabel_core::DomainError;
use clearlabel_products::{ProductDraft, ProductRecord, ProductStatus, RecordId, Score};
use clearlabel_wizard::{ProductWizard, StepProgress, SubmissionState, ValidationErrors, WizardStep};

use crate::context::{DashboardContext, Theme};
use crate::settings::UserSettings;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Page {
    Dashboard,
    Products,
    AddProduct,
    Analytics,
    Settings,
}

impl Page {
    pub const ALL: [Page; 5] = [
        Page::Dashboard,
        Page::Products,
        Page::AddProduct,
        Page::Analytics,
        Page::Settings,
    ];

    pub fn route(&self) -> &'static str {
        match self {
            Page::Dashboard => "/",
            Page::Products => "/products",
            Page::AddProduct => "/add-product",
            Page::Analytics => "/analytics",
            Page::Settings => "/settings",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Page::Dashboard => "Dashboard",
            Page::Products => "Products",
            Page::AddProduct => "Add Product",
            Page::Analytics => "Analytics",
            Page::Settings => "Settings",
        }
    }
}

impl FromStr for Page {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().trim_start_matches('/').to_ascii_lowercase();
        match key.as_str() {
            "" | "dashboard" => Ok(Page::Dashboard),
            "products" => Ok(Page::Products),
            "add-product" => Ok(Page::AddProduct),
            "analytics" => Ok(Page::Analytics),
            "settings" => Ok(Page::Settings),
            other => Err(DomainError::validation(format!("unknown page: {other}"))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageView<T> {
    pub page: Page,
    pub theme: Theme,
    pub content: T,
}

impl<T> PageView<T> {
    fn new(page: Page, ctx: &DashboardContext, content: T) -> Self {
        Self {
            page,
            theme: ctx.theme(),
            content,
        }
    }
}

/// Product card plus the details shown in its modal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductCard<'a> {
    pub id: &'a RecordId,
    pub product_name: &'a str,
    pub category: &'a str,
    pub score: Score,
    pub status: ProductStatus,
    pub flags: &'a [String],
    pub explanation: &'a str,
    pub suggestions: &'a [String],
}

impl<'a> From<&'a ProductRecord> for ProductCard<'a> {
    fn from(record: &'a ProductRecord) -> Self {
        Self {
            id: &record.id,
            product_name: &record.product_name,
            category: record.category_or_default(),
            score: record.score,
            status: record.status(),
            flags: &record.flags,
            explanation: &record.explanation,
            suggestions: &record.suggestions,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductsView<'a> {
    pub filter: ProductFilter,
    pub total: usize,
    pub results: Vec<ProductCard<'a>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StepHeader {
    pub index: usize,
    pub label: &'static str,
    pub progress: StepProgress,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum SubmissionView<'a> {
    /// Review details with the submit action enabled.
    Ready,
    /// Submit action disabled until the review resolves.
    Submitting,
    Completed { review: &'a ReviewResult },
    Failed { message: String, retryable: bool },
}

impl<'a> From<&'a SubmissionState> for SubmissionView<'a> {
    fn from(state: &'a SubmissionState) -> Self {
        match state {
            SubmissionState::Idle => SubmissionView::Ready,
            SubmissionState::InFlight => SubmissionView::Submitting,
            SubmissionState::Completed(review) => SubmissionView::Completed { review },
            SubmissionState::Failed(error) => SubmissionView::Failed {
                message: error.to_string(),
                retryable: error.is_retryable(),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WizardView<'a> {
    pub step: WizardStep,
    pub steps: Vec<StepHeader>,
    pub draft: &'a ProductDraft,
    pub errors: &'a ValidationErrors,
    pub can_go_back: bool,
    /// `None` outside the Review step.
    pub submission: Option<SubmissionView<'a>>,
}

pub fn dashboard(ctx: &DashboardContext) -> PageView<DashboardSummary<'_>> {
    PageView::new(
        Page::Dashboard,
        ctx,
        DashboardSummary::compute(ctx.records(), ctx.top_n()),
    )
}

pub fn products<'a>(
    ctx: &'a DashboardContext,
    filter: &ProductFilter,
) -> PageView<ProductsView<'a>> {
    let results: Vec<ProductCard<'a>> = filter
        .apply(ctx.records())
        .into_iter()
        .map(ProductCard::from)
        .collect();
    PageView::new(
        Page::Products,
        ctx,
        ProductsView {
            filter: filter.clone(),
            total: ctx.records().len(),
            results,
        },
    )
}

pub fn analytics(ctx: &DashboardContext) -> PageView<AnalyticsReport<'_>> {
    PageView::new(
        Page::Analytics,
        ctx,
        AnalyticsReport::compute(ctx.records(), ctx.top_n(), ctx.flag_limit()),
    )
}

pub fn add_product<'a>(
    ctx: &DashboardContext,
    wizard: &'a ProductWizard,
) -> PageView<WizardView<'a>> {
    let steps = wizard
        .progress()
        .into_iter()
        .map(|(step, progress)| StepHeader {
            index: step.index(),
            label: step.label(),
            progress,
        })
        .collect();
    let at_review = wizard.step() == WizardStep::Review;
    PageView::new(
        Page::AddProduct,
        ctx,
        WizardView {
            step: wizard.step(),
            steps,
            draft: wizard.draft(),
            errors: wizard.errors(),
            can_go_back: !at_review && wizard.step() != WizardStep::FIRST,
            submission: at_review.then(|| SubmissionView::from(wizard.submission())),
        },
    )
}

pub fn settings<'a>(
    ctx: &DashboardContext,
    settings: &'a UserSettings,
) -> PageView<&'a UserSettings> {
    PageView::new(Page::Settings, ctx, settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clearlabel_analytics::StatusFilter;
    use clearlabel_products::parse_records;
    use serde_json::Value;

    use crate::context::SAMPLE_FIXTURE;

    fn ctx() -> DashboardContext {
        DashboardContext::new(Theme::Dark, parse_records(SAMPLE_FIXTURE).unwrap())
    }

    #[test]
    fn page_parses_routes_and_names() {
        for page in Page::ALL {
            assert_eq!(page.route().parse::<Page>().unwrap(), page);
        }
        assert_eq!("analytics".parse::<Page>().unwrap(), Page::Analytics);
        assert!("reports".parse::<Page>().is_err());
    }

    #[test]
    fn dashboard_view_carries_theme_and_summary() {
        let ctx = ctx();
        let json = serde_json::to_value(dashboard(&ctx)).unwrap();
        assert_eq!(json["page"], "dashboard");
        assert_eq!(json["theme"], "dark");
        assert_eq!(json["content"]["totalProducts"], ctx.records().len());
    }

    #[test]
    fn products_view_applies_the_filter() {
        let ctx = ctx();
        let filter =
            ProductFilter::default().with_status(StatusFilter::Only(ProductStatus::Flagged));
        let view = products(&ctx, &filter);
        assert!(!view.content.results.is_empty());
        assert!(view.content.results.iter().all(|c| c.status == ProductStatus::Flagged));
        assert_eq!(view.content.total, ctx.records().len());
    }

    #[test]
    fn blank_category_renders_as_general() {
        let ctx = ctx();
        let view = products(&ctx, &ProductFilter::default().with_query("toothbrush"));
        assert_eq!(view.content.results[0].category, "General");
    }

    #[test]
    fn wizard_view_hides_submission_before_review() {
        let ctx = ctx();
        let wizard = ProductWizard::new();
        let view = add_product(&ctx, &wizard);
        assert_eq!(view.content.step, WizardStep::BasicInfo);
        assert!(view.content.submission.is_none());
        assert!(!view.content.can_go_back);
        assert_eq!(view.content.steps[0].progress, StepProgress::Current);
    }

    #[test]
    fn analytics_view_serializes_report() {
        let ctx = ctx();
        let json: Value = serde_json::to_value(analytics(&ctx)).unwrap();
        assert_eq!(json["content"]["scoreDistribution"].as_array().unwrap().len(), 3);
        assert!(json["content"]["topPerformer"].is_string());
    }
}
