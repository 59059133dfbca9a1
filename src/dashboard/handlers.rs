//! Dashboard HTTP handler and view assembly.

use std::sync::Arc;

use axum::{
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

use crate::{
    AppState,
    dashboard::{
        aggregation::{DashboardSummary, summarize},
        cards::summary_cards_view,
        charts::{DashboardChart, category_chart, charts_script, charts_view, daily_trend_chart},
        tables::recent_transactions_table,
    },
    endpoints,
    html::{HeadElement, PAGE_CONTAINER_STYLE, base, link},
    navigation::NavBar,
    store::{ExpenseStore, load_expenses_or_empty},
};

/// The state needed for displaying the dashboard page.
#[derive(Clone)]
pub struct DashboardState {
    /// The row store expenses are read from.
    pub store: Arc<dyn ExpenseStore>,
}

impl FromRef<AppState> for DashboardState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            store: state.store.clone(),
        }
    }
}

/// Display a page with an overview of the recorded expenses.
///
/// Read failures never surface here: the page renders with no data instead.
pub async fn get_dashboard_page(State(state): State<DashboardState>) -> Response {
    let expenses = load_expenses_or_empty(state.store.as_ref()).await;
    let summary = summarize(&expenses);

    let nav_bar = NavBar::new(endpoints::DASHBOARD_VIEW);

    dashboard_view(nav_bar, &summary).into_response()
}

/// Creates the array of dashboard charts from the aggregated summary.
fn build_dashboard_charts(summary: &DashboardSummary) -> [DashboardChart; 2] {
    [
        DashboardChart {
            id: "category-chart",
            options: category_chart(&summary.category_totals).to_string(),
        },
        DashboardChart {
            id: "daily-trend-chart",
            options: daily_trend_chart(&summary.daily_totals).to_string(),
        },
    ]
}

/// Renders the dashboard page with cards, charts and the recent
/// transactions table.
fn dashboard_view(nav_bar: NavBar<'_>, summary: &DashboardSummary) -> Markup {
    let nav_bar = nav_bar.into_html();
    let charts = build_dashboard_charts(summary);
    let back_link = link(endpoints::ROOT, "Volver al formulario");

    let content = html!(
        (nav_bar)

        div class={"max-w-screen-xl w-full " (PAGE_CONTAINER_STYLE)}
        {
            div class="w-full flex flex-wrap items-baseline justify-between mb-4"
            {
                div
                {
                    h2 class="text-3xl font-bold" { "Dashboard Financiero" }

                    p class="text-sm text-gray-600 dark:text-gray-400"
                    {
                        "Resumen de tus gastos e historial"
                    }
                }

                (back_link)
            }

            (summary_cards_view(summary))

            (charts_view(&charts))

            (recent_transactions_table(&summary.recent_transactions))
        }
    );

    let scripts = [
        HeadElement::ScriptLink("/static/echarts.6.0.0.min.js".to_owned()),
        charts_script(&charts),
    ];

    base("Dashboard", &scripts, &content)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::Body,
        extract::State,
        http::{Response, StatusCode},
    };
    use scraper::{Html, Selector};

    use super::{DashboardState, get_dashboard_page};
    use crate::{
        expense::Expense,
        store::{ExpenseStore, FailingExpenseStore, InMemoryExpenseStore},
    };

    async fn seeded_store(expenses: &[Expense]) -> Arc<InMemoryExpenseStore> {
        let store = Arc::new(InMemoryExpenseStore::new());

        for expense in expenses {
            store.append_row(expense).await.unwrap();
        }

        store
    }

    fn expense(date: &str, amount: f64, category: &str) -> Expense {
        Expense {
            date: date.to_owned(),
            amount,
            category: category.to_owned(),
            description: "".to_owned(),
        }
    }

    #[tokio::test]
    async fn dashboard_page_loads_successfully() {
        let store = seeded_store(&[
            expense("15/1/2024", 49.99, "Alimentación"),
            expense("16/1/2024", 12.5, "Ocio"),
        ])
        .await;
        let state = DashboardState { store };

        let response = get_dashboard_page(State(state)).await;

        assert_eq!(response.status(), StatusCode::OK);

        let html = parse_html(response).await;
        assert_valid_html(&html);

        assert_chart_exists(&html, "category-chart");
        assert_chart_exists(&html, "daily-trend-chart");
        assert_table_exists(&html);
    }

    #[tokio::test]
    async fn dashboard_shows_summary_values() {
        let store = seeded_store(&[
            expense("15/1/2024", 30.0, "Alimentación"),
            expense("16/1/2024", 10.0, "Ocio"),
        ])
        .await;
        let state = DashboardState { store };

        let response = get_dashboard_page(State(state)).await;
        let html = parse_html(response).await;

        assert!(html.html().contains("$40.00"), "want the total spent");
        assert!(html.html().contains("$20.00"), "want the average");
    }

    #[tokio::test]
    async fn dashboard_shows_empty_state_with_no_data() {
        let state = DashboardState {
            store: Arc::new(InMemoryExpenseStore::new()),
        };

        let response = get_dashboard_page(State(state)).await;

        assert_eq!(response.status(), StatusCode::OK);

        let html = parse_html(response).await;
        assert!(html.html().contains("No hay gastos registrados aún."));
        assert!(html.html().contains("$0.00"));
    }

    // A failing store must render the same page as an empty one. The read
    // error is swallowed by policy, not by accident.
    #[tokio::test]
    async fn dashboard_degrades_to_empty_when_the_store_fails() {
        let state = DashboardState {
            store: Arc::new(FailingExpenseStore),
        };

        let response = get_dashboard_page(State(state)).await;

        assert_eq!(response.status(), StatusCode::OK);

        let html = parse_html(response).await;
        assert!(html.html().contains("No hay gastos registrados aún."));
    }

    async fn parse_html(response: Response<Body>) -> Html {
        let body = response.into_body();
        let body = axum::body::to_bytes(body, usize::MAX).await.unwrap();
        let text = String::from_utf8_lossy(&body).to_string();

        Html::parse_document(&text)
    }

    #[track_caller]
    fn assert_valid_html(html: &Html) {
        assert!(
            html.errors.is_empty(),
            "Got HTML parsing errors: {:?}",
            html.errors
        );
    }

    #[track_caller]
    fn assert_chart_exists(html: &Html, chart_id: &str) {
        let selector = Selector::parse(&format!("#{}", chart_id)).unwrap();
        assert!(
            html.select(&selector).next().is_some(),
            "Chart with id '{}' not found",
            chart_id
        );
    }

    #[track_caller]
    fn assert_table_exists(html: &Html) {
        let selector = Selector::parse("table").unwrap();
        assert!(
            html.select(&selector).next().is_some(),
            "Recent transactions table not found"
        );
    }
}
