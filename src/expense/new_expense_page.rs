//! Renders the page for recording a new expense.

use axum::response::{IntoResponse, Response};
use maud::html;
use time::OffsetDateTime;

use crate::{
    endpoints,
    expense::form::{ExpenseFormValues, expense_form_section},
    html::{base, dollar_input_styles},
    navigation::NavBar,
};

/// Renders the expense form page with today's date pre-selected.
pub async fn get_expense_form_page() -> Response {
    let nav_bar = NavBar::new(endpoints::ROOT).into_html();
    let today = OffsetDateTime::now_utc().date().to_string();
    let values = ExpenseFormValues::fresh(&today);

    let content = html!(
        (nav_bar)

        (expense_form_section(&values, None))
    );

    base("Registrar Gasto", &[dollar_input_styles()], &content).into_response()
}

#[cfg(test)]
mod view_tests {
    use axum::{
        body::Body,
        http::{Response, StatusCode},
    };
    use scraper::{Html, Selector};
    use time::OffsetDateTime;

    use super::get_expense_form_page;

    #[tokio::test]
    async fn expense_form_page_returns_form() {
        let response = get_expense_form_page().await;

        assert_status_ok(&response);
        let document = parse_html(response).await;
        assert_valid_html(&document);
        assert_correct_inputs(&document);
    }

    #[track_caller]
    fn assert_status_ok(response: &Response<Body>) {
        assert_eq!(response.status(), StatusCode::OK);
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
    fn assert_correct_inputs(document: &Html) {
        let expected_inputs = [("amount", "number"), ("date", "date")];

        for (name, element_type) in expected_inputs {
            let selector_string = format!("input[type={element_type}]");
            let input_selector = Selector::parse(&selector_string).unwrap();
            let inputs = document.select(&input_selector).collect::<Vec<_>>();
            assert_eq!(
                inputs.len(),
                1,
                "want 1 {element_type} input, got {}",
                inputs.len()
            );

            let input = inputs.first().unwrap();

            let input_name = input.value().attr("name");
            assert_eq!(
                input_name,
                Some(name),
                "want {element_type} input with name=\"{name}\", got {input_name:?}"
            );

            let required = input.value().attr("required");
            assert!(
                required.is_some(),
                "want {name} input to be required, got {required:?}"
            );
        }

        let date_selector = Selector::parse("input[type=date]").unwrap();
        let date_input = document.select(&date_selector).next().unwrap();
        assert_eq!(
            date_input.value().attr("value"),
            Some(OffsetDateTime::now_utc().date().to_string().as_str()),
            "the date input should default to today"
        );

        let category_selector = Selector::parse("select[name=category]").unwrap();
        assert!(
            document.select(&category_selector).next().is_some(),
            "want a category select"
        );
    }
}
