use maud::{Markup, html};

use crate::{
    endpoints,
    expense::model::CATEGORIES,
    html::{
        BUTTON_PRIMARY_STYLE, FORM_CONTAINER_STYLE, FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE,
        LINK_STYLE, loading_spinner,
    },
};

/// The values the form fields are rendered with.
///
/// Everything is a raw string so a failed submission can be echoed back
/// exactly as the user typed it.
#[derive(Default)]
pub(super) struct ExpenseFormValues<'a> {
    pub date: &'a str,
    pub amount: &'a str,
    pub category: &'a str,
    pub description: &'a str,
}

impl<'a> ExpenseFormValues<'a> {
    /// Values for a fresh form with today's date pre-selected.
    pub fn fresh(today: &'a str) -> Self {
        Self {
            date: today,
            ..Default::default()
        }
    }

    /// Echo previously submitted values.
    pub fn from_fields(fields: &'a std::collections::HashMap<String, String>) -> Self {
        let field = |name: &str| -> &'a str { fields.get(name).map(String::as_str).unwrap_or("") };

        Self {
            date: field("date"),
            amount: field("amount"),
            category: field("category"),
            description: field("description"),
        }
    }
}

/// Renders the expense form section: the submission feedback (if any), the
/// form fields and the submit button.
///
/// The section swaps itself out via HTMX on every submission, so it carries
/// a stable element ID.
pub(super) fn expense_form_section(
    values: &ExpenseFormValues<'_>,
    feedback: Option<Markup>,
) -> Markup {
    html! {
        section id="expense-form-section" class=(FORM_CONTAINER_STYLE)
        {
            div
                class="w-full bg-white rounded-lg shadow dark:border mt-6 sm:max-w-md
                    dark:bg-gray-800 dark:border-gray-700"
            {
                div class="p-6 space-y-4 md:space-y-6 sm:p-8"
                {
                    h1
                        class="text-xl font-bold leading-tight tracking-tight text-center
                            text-gray-900 md:text-2xl dark:text-white"
                    {
                        "Registrar Gasto"
                    }

                    p class="text-sm text-center text-gray-600 dark:text-gray-400"
                    {
                        "Controla tus finanzas diarias"
                    }

                    @if let Some(feedback) = feedback {
                        (feedback)
                    }

                    form
                        hx-post=(endpoints::EXPENSES_API)
                        hx-target="#expense-form-section"
                        hx-swap="outerHTML"
                        class="space-y-4"
                    {
                        (expense_form_fields(values))

                        button
                            type="submit"
                            id="indicator"
                            class=(BUTTON_PRIMARY_STYLE)
                        {
                            span class="htmx-indicator" { (loading_spinner()) }
                            "Guardar Gasto"
                        }
                    }

                    p class="text-center"
                    {
                        a href=(endpoints::DASHBOARD_VIEW) class=(LINK_STYLE)
                        {
                            "Ver Dashboard y Estadísticas →"
                        }
                    }
                }
            }
        }
    }
}

fn expense_form_fields(values: &ExpenseFormValues<'_>) -> Markup {
    html! {
        div
        {
            label
                for="amount"
                class=(FORM_LABEL_STYLE)
            {
                "Monto"
            }

            div class="input-wrapper w-full"
            {
                input
                    name="amount"
                    id="amount"
                    type="number"
                    step="0.01"
                    min="0.01"
                    placeholder="0.00"
                    required
                    autofocus
                    value=[non_empty(values.amount)]
                    class=(FORM_TEXT_INPUT_STYLE);
            }
        }

        div class="grid grid-cols-2 gap-4"
        {
            div
            {
                label
                    for="date"
                    class=(FORM_LABEL_STYLE)
                {
                    "Fecha"
                }

                input
                    name="date"
                    id="date"
                    type="date"
                    value=(values.date)
                    required
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            div
            {
                label
                    for="category"
                    class=(FORM_LABEL_STYLE)
                {
                    "Categoría"
                }

                select
                    name="category"
                    id="category"
                    required
                    class=(FORM_TEXT_INPUT_STYLE)
                {
                    option value="" disabled selected[values.category.is_empty()]
                    {
                        "Seleccionar"
                    }

                    @for category in CATEGORIES {
                        @if category == values.category {
                            option value=(category) selected { (category) }
                        } @else {
                            option value=(category) { (category) }
                        }
                    }
                }
            }
        }

        div
        {
            label
                for="description"
                class=(FORM_LABEL_STYLE)
            {
                "Descripción (Opcional)"
            }

            textarea
                name="description"
                id="description"
                rows="2"
                placeholder="Detalles del gasto..."
                class=(FORM_TEXT_INPUT_STYLE)
            {
                (values.description)
            }
        }
    }
}

fn non_empty(value: &str) -> Option<&str> {
    (!value.is_empty()).then_some(value)
}
