use crate::application::dto::{ViewContent, ViewSnapshot};
use crate::application::views::{LoadFailure, LoadState};
use crate::billing::domain::{Bill, Customer, Product};
use crate::ports::outbound::ViewRenderer;
use crate::shared::Result;
use serde_json::Number;

/// Markdown table header for the customer list
const CUSTOMER_TABLE_HEADER: &str = "| ID | Name | Email |\n";
const CUSTOMER_TABLE_SEPARATOR: &str = "|----|------|-------|\n";

/// Markdown table header for the product list
const PRODUCT_TABLE_HEADER: &str = "| ID | Name | Price | Quantity |\n";
const PRODUCT_TABLE_SEPARATOR: &str = "|----|------|-------|----------|\n";

/// Markdown table header for a customer's bills
const BILL_TABLE_HEADER: &str = "| Bill | Date | Items | Total |\n";
const BILL_TABLE_SEPARATOR: &str = "|------|------|-------|-------|\n";

/// Markdown table header for the lines of one bill
const ITEM_TABLE_HEADER: &str = "| Product | Quantity | Price | Total |\n";
const ITEM_TABLE_SEPARATOR: &str = "|---------|----------|-------|-------|\n";

/// MarkdownRenderer adapter - one titled table per view
pub struct MarkdownRenderer;

impl MarkdownRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Escapes pipe characters and newlines for safe Markdown table rendering
    fn escape_cell(text: &str) -> String {
        text.replace('|', "\\|").replace('\n', " ")
    }

    fn text_or_dash(text: Option<&str>) -> String {
        text.map(Self::escape_cell)
            .unwrap_or_else(|| "-".to_string())
    }

    fn amount(value: Option<&Number>) -> String {
        value
            .and_then(Number::as_f64)
            .map(|v| format!("{:.2}", v))
            .unwrap_or_else(|| "-".to_string())
    }

    fn count(value: Option<&Number>) -> String {
        value
            .map(|v| v.to_string())
            .unwrap_or_else(|| "-".to_string())
    }
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Helper methods for rendering sections
impl MarkdownRenderer {
    /// Renders the non-loaded states; returns the data when loaded
    fn render_status<'a, T>(
        &self,
        output: &mut String,
        state: &'a LoadState<T>,
        what: &str,
    ) -> Option<&'a T> {
        match state {
            LoadState::Idle => {
                output.push_str(&format!("_No {} loaded._\n", what));
                None
            }
            LoadState::Loading => {
                output.push_str(&format!("_Loading {}..._\n", what));
                None
            }
            LoadState::Failed(failure) => {
                self.render_failure(output, failure, what);
                None
            }
            LoadState::Loaded(data) => Some(data),
        }
    }

    fn render_failure(&self, output: &mut String, failure: &LoadFailure, what: &str) {
        output.push_str(&format!(
            "> ⚠️ Failed to load {} ({} error)\n>\n> {}\n",
            what,
            failure.kind,
            failure.message.replace('\n', " ")
        ));
    }

    fn render_customers(&self, output: &mut String, customers: &[Customer]) {
        if customers.is_empty() {
            output.push_str("_No customers._\n");
            return;
        }

        output.push_str(CUSTOMER_TABLE_HEADER);
        output.push_str(CUSTOMER_TABLE_SEPARATOR);
        for customer in customers {
            output.push_str(&format!(
                "| {} | {} | {} |\n",
                customer.id,
                Self::text_or_dash(customer.name.as_deref()),
                Self::text_or_dash(customer.email.as_deref())
            ));
        }
        output.push_str(&format!(
            "\nOpen a customer's bills with `/bills/<id>` ({} customers).\n",
            customers.len()
        ));
    }

    fn render_products(&self, output: &mut String, products: &[Product]) {
        if products.is_empty() {
            output.push_str("_No products._\n");
            return;
        }

        output.push_str(PRODUCT_TABLE_HEADER);
        output.push_str(PRODUCT_TABLE_SEPARATOR);
        for product in products {
            output.push_str(&format!(
                "| {} | {} | {} | {} |\n",
                Self::text_or_dash(product.id.as_deref()),
                Self::text_or_dash(product.name.as_deref()),
                Self::amount(product.price.get()),
                Self::count(product.quantity.get())
            ));
        }
    }

    fn render_bills(&self, output: &mut String, bills: &[Bill]) {
        if bills.is_empty() {
            output.push_str("_No bills for this customer._\n");
            return;
        }

        output.push_str(BILL_TABLE_HEADER);
        output.push_str(BILL_TABLE_SEPARATOR);
        for bill in bills {
            let date = bill
                .date
                .get()
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_else(|| "-".to_string());
            output.push_str(&format!(
                "| {} | {} | {} | {} |\n",
                bill.id,
                date,
                bill.items().len(),
                Self::amount(bill.total.get())
            ));
        }
    }

    fn render_full_bill(&self, output: &mut String, bill: &Bill) {
        if let Some(date) = bill.date.get() {
            output.push_str(&format!("- **Date:** {}\n", date.format("%Y-%m-%d")));
        }

        let customer = match (bill.customer.get(), bill.customer_id.get()) {
            (Some(customer), _) => format!(
                "{} (#{})",
                Self::text_or_dash(customer.name.as_deref()),
                customer.id
            ),
            (None, Some(id)) => format!("#{}", id),
            (None, None) => "-".to_string(),
        };
        output.push_str(&format!("- **Customer:** {}\n", customer));
        output.push_str(&format!("- **Total:** {}\n\n", Self::amount(bill.total.get())));

        if bill.items().is_empty() {
            output.push_str("_No items._\n");
            return;
        }

        output.push_str(ITEM_TABLE_HEADER);
        output.push_str(ITEM_TABLE_SEPARATOR);
        for item in bill.items() {
            let product = item
                .product_name
                .as_deref()
                .or(item.product_id.as_deref());
            output.push_str(&format!(
                "| {} | {} | {} | {} |\n",
                Self::text_or_dash(product),
                Self::count(item.quantity.get()),
                Self::amount(item.price.get()),
                Self::amount(item.total.get())
            ));
        }
    }
}

impl ViewRenderer for MarkdownRenderer {
    fn render(&self, snapshot: &ViewSnapshot) -> Result<String> {
        let mut output = String::new();

        match &snapshot.content {
            ViewContent::Customers { state } => {
                output.push_str("# Customers\n\n");
                if let Some(customers) = self.render_status(&mut output, state, "customers") {
                    self.render_customers(&mut output, customers);
                }
            }
            ViewContent::Products { state } => {
                output.push_str("# Products\n\n");
                if let Some(products) = self.render_status(&mut output, state, "products") {
                    self.render_products(&mut output, products);
                }
            }
            ViewContent::Bills { customer_id, state } => {
                match customer_id {
                    Some(id) => output.push_str(&format!("# Bills of customer {}\n\n", id)),
                    None => output.push_str("# Bills\n\n"),
                }
                if let Some(bills) = self.render_status(&mut output, state, "bills") {
                    self.render_bills(&mut output, bills);
                }
            }
            ViewContent::FullBill { bill_id, state } => {
                output.push_str(&format!("# Bill {}\n\n", bill_id));
                if let Some(bill) = self.render_status(&mut output, state, "bill") {
                    self.render_full_bill(&mut output, bill);
                }
            }
        }

        Ok(output)
    }
}
