//! Prompt construction for the monthly report

use serde_json::json;

use crate::models::{Expense, Money};

/// What the report is asked to analyse
#[derive(Debug, Clone)]
pub struct ReportRequest {
    /// Expenses of the period, in display order
    pub expenses: Vec<Expense>,
    /// Human-readable period, e.g. "junio de 2024"
    pub period_label: String,
    pub total: Money,
}

/// Build the prompt sent to the model
///
/// Only the fields the analysis needs are included for each expense.
pub fn build_prompt(request: &ReportRequest, currency_symbol: &str) -> String {
    let rows: Vec<_> = request
        .expenses
        .iter()
        .map(|e| {
            json!({
                "fecha": e.date.to_string(),
                "categoria": e.category,
                "subcategoria": e.subcategory,
                "monto": e.amount,
                "descripcion": e.description_or_empty(),
            })
        })
        .collect();

    format!(
        "Actúa como un asistente financiero personal experto.\n\
         \n\
         Analiza los siguientes gastos familiares del mes de {label}.\n\
         El total gastado fue: {total}.\n\
         \n\
         Datos de gastos (JSON):\n\
         {data}\n\
         \n\
         Por favor genera un informe conciso pero perspicaz en español que incluya:\n\
         1. Un resumen general del comportamiento de gasto.\n\
         2. Categorías donde se gastó más de lo inusual o destacan.\n\
         3. Recomendaciones breves para ahorro basadas en estos patrones.\n\
         4. Menciona específicamente gastos relacionados con \"Cristopher\" si existen.\n\
         \n\
         Usa formato Markdown para resaltar puntos clave. Sé amable y motivador.\n",
        label = request.period_label,
        total = request.total.format_with_symbol(currency_symbol),
        data = serde_json::Value::Array(rows),
    )
}
