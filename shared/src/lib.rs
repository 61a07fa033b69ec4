use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Amount above which a rendered expense is visually highlighted.
pub const LARGE_EXPENSE_THRESHOLD: f64 = 50.0;

/// Expense category. The set is fixed and shared by every component;
/// anything outside it never survives parsing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Food,
    Transportation,
    Entertainment,
    Other,
}

impl Category {
    /// All categories, in display order. Used to build select options.
    pub const ALL: [Category; 4] = [
        Category::Food,
        Category::Transportation,
        Category::Entertainment,
        Category::Other,
    ];

    /// Canonical name as shown in the UI and carried over the wire.
    pub fn name(&self) -> &'static str {
        match self {
            Category::Food => "Food",
            Category::Transportation => "Transportation",
            Category::Entertainment => "Entertainment",
            Category::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Category {
    type Err = CategoryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Food" => Ok(Category::Food),
            "Transportation" => Ok(Category::Transportation),
            "Entertainment" => Ok(Category::Entertainment),
            "Other" => Ok(Category::Other),
            _ => Err(CategoryParseError(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryParseError(pub String);

impl fmt::Display for CategoryParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' is not a recognized category", self.0)
    }
}

impl std::error::Error for CategoryParseError {}

/// A validated expense record. Owned and mutated exclusively by the parent
/// collection; components only read these or produce new drafts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Unique id, assigned by the parent when the record is accepted
    pub id: u64,
    /// Non-empty description of the expense
    pub description: String,
    /// Positive amount in currency units
    pub amount: f64,
    pub category: Category,
    /// Calendar date in YYYY-MM-DD format
    pub date: String,
}

impl Expense {
    /// Build a record from an accepted payload. Id assignment is the
    /// receiver's responsibility, never the form's.
    pub fn from_new(id: u64, payload: NewExpense) -> Self {
        Self {
            id,
            description: payload.description,
            amount: payload.amount,
            category: payload.category,
            date: payload.date,
        }
    }

    /// Whether this expense crosses the highlight threshold. Purely
    /// presentational, not part of the data model.
    pub fn is_large(&self) -> bool {
        self.amount > LARGE_EXPENSE_THRESHOLD
    }
}

/// Normalized expense payload emitted by a successful form submit.
/// Carries no id — the parent assigns one on acceptance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewExpense {
    pub description: String,
    pub amount: f64,
    pub category: Category,
    pub date: String,
}

/// UI-only view predicate held by the expense list. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CategoryFilter {
    All,
    Category(Category),
}

impl CategoryFilter {
    pub fn matches(&self, category: &Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Category(c) => c == category,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CategoryFilter::All => "All",
            CategoryFilter::Category(c) => c.name(),
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for CategoryFilter {
    type Err = CategoryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "All" {
            Ok(CategoryFilter::All)
        } else {
            Category::from_str(s).map(CategoryFilter::Category)
        }
    }
}

/// The filtered view of a collection: the input order is preserved, and
/// `All` returns the collection unchanged.
pub fn filter_expenses(expenses: &[Expense], filter: &CategoryFilter) -> Vec<Expense> {
    expenses
        .iter()
        .filter(|e| filter.matches(&e.category))
        .cloned()
        .collect()
}

/// Sum of amounts over a view. Display rounding is the caller's concern;
/// the underlying amounts are never modified.
pub fn total_amount(expenses: &[Expense]) -> f64 {
    expenses.iter().map(|e| e.amount).sum()
}

/// Next id the parent should assign: one past the highest id in the
/// collection, starting at 1 when empty.
pub fn next_expense_id(expenses: &[Expense]) -> u64 {
    expenses.iter().map(|e| e.id).max().map_or(1, |max| max + 1)
}

/// The collection with the given record removed, order preserved.
/// Removing an unknown id is a no-op.
pub fn remove_expense(expenses: &[Expense], id: u64) -> Vec<Expense> {
    expenses.iter().filter(|e| e.id != id).cloned().collect()
}

/// Current local date in YYYY-MM-DD format.
pub fn current_date_string() -> String {
    chrono::Local::now().format("%Y-%m-%d").to_string()
}

/// Unvalidated, pre-submission form state. Amount and category stay as raw
/// input text until validation parses them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseDraft {
    pub description: String,
    pub amount: String,
    pub category: String,
    pub date: String,
}

impl Default for ExpenseDraft {
    fn default() -> Self {
        Self {
            description: String::new(),
            amount: String::new(),
            category: Category::Food.name().to_string(),
            date: current_date_string(),
        }
    }
}

/// The fixed set of form fields an error can attach to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExpenseField {
    Description,
    Amount,
    Category,
    Date,
}

/// Per-field validation messages with one slot per field, so there is no
/// dynamic keying and no way to address a field that does not exist.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FieldErrors {
    pub description: Option<String>,
    pub amount: Option<String>,
    pub category: Option<String>,
    pub date: Option<String>,
}

impl FieldErrors {
    pub fn from_errors(errors: &[ValidationError]) -> Self {
        let mut field_errors = Self::default();
        for error in errors {
            field_errors.set(error.field(), error.to_string());
        }
        field_errors
    }

    pub fn set(&mut self, field: ExpenseField, message: String) {
        *self.slot(field) = Some(message);
    }

    /// Clears exactly one field's message, leaving the others intact.
    pub fn clear(&mut self, field: ExpenseField) {
        *self.slot(field) = None;
    }

    pub fn get(&self, field: ExpenseField) -> Option<&str> {
        match field {
            ExpenseField::Description => self.description.as_deref(),
            ExpenseField::Amount => self.amount.as_deref(),
            ExpenseField::Category => self.category.as_deref(),
            ExpenseField::Date => self.date.as_deref(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.description.is_none()
            && self.amount.is_none()
            && self.category.is_none()
            && self.date.is_none()
    }

    fn slot(&mut self, field: ExpenseField) -> &mut Option<String> {
        match field {
            ExpenseField::Description => &mut self.description,
            ExpenseField::Amount => &mut self.amount,
            ExpenseField::Category => &mut self.category,
            ExpenseField::Date => &mut self.date,
        }
    }
}

/// Specific draft validation failures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ValidationError {
    EmptyDescription,
    EmptyAmount,
    InvalidAmount(String),
    AmountNotPositive,
    UnknownCategory(String),
    EmptyDate,
}

impl ValidationError {
    pub fn field(&self) -> ExpenseField {
        match self {
            ValidationError::EmptyDescription => ExpenseField::Description,
            ValidationError::EmptyAmount
            | ValidationError::InvalidAmount(_)
            | ValidationError::AmountNotPositive => ExpenseField::Amount,
            ValidationError::UnknownCategory(_) => ExpenseField::Category,
            ValidationError::EmptyDate => ExpenseField::Date,
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::EmptyDescription => write!(f, "Description is required"),
            ValidationError::EmptyAmount => write!(f, "Amount is required"),
            ValidationError::InvalidAmount(input) => {
                write!(f, "'{}' is not a valid amount", input)
            }
            ValidationError::AmountNotPositive => {
                write!(f, "Amount must be greater than zero")
            }
            ValidationError::UnknownCategory(input) => {
                write!(f, "'{}' is not a recognized category", input)
            }
            ValidationError::EmptyDate => write!(f, "Date is required"),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Result of validating a draft. `payload` is populated iff the draft is
/// valid; `errors` lists every failing field, never just the first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DraftValidation {
    pub is_valid: bool,
    pub errors: Vec<ValidationError>,
    pub payload: Option<NewExpense>,
}

/// Validate a draft. Pure: no side effects, every rule applied
/// independently so all failures are reported together.
pub fn validate_draft(draft: &ExpenseDraft) -> DraftValidation {
    let mut errors = Vec::new();

    let description = draft.description.trim();
    if description.is_empty() {
        errors.push(ValidationError::EmptyDescription);
    }

    let amount_input = draft.amount.trim();
    let mut amount = None;
    if amount_input.is_empty() {
        errors.push(ValidationError::EmptyAmount);
    } else {
        match amount_input.parse::<f64>() {
            Ok(value) if value.is_finite() && value > 0.0 => amount = Some(value),
            Ok(value) if value.is_finite() => errors.push(ValidationError::AmountNotPositive),
            _ => errors.push(ValidationError::InvalidAmount(amount_input.to_string())),
        }
    }

    let category = match draft.category.parse::<Category>() {
        Ok(category) => Some(category),
        Err(_) => {
            errors.push(ValidationError::UnknownCategory(draft.category.clone()));
            None
        }
    };

    if draft.date.is_empty() {
        errors.push(ValidationError::EmptyDate);
    }

    let payload = if errors.is_empty() {
        // The unwraps cannot fail here: an empty error list means every
        // field parsed above.
        Some(NewExpense {
            description: description.to_string(),
            amount: amount.unwrap(),
            category: category.unwrap(),
            date: draft.date.clone(),
        })
    } else {
        None
    };

    DraftValidation {
        is_valid: payload.is_some(),
        errors,
        payload,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expense(id: u64, description: &str, amount: f64, category: Category) -> Expense {
        Expense {
            id,
            description: description.to_string(),
            amount,
            category,
            date: "2024-01-15".to_string(),
        }
    }

    fn sample_expenses() -> Vec<Expense> {
        vec![
            expense(1, "Groceries", 42.10, Category::Food),
            expense(2, "Bus pass", 25.00, Category::Transportation),
            expense(3, "Coffee", 4.50, Category::Food),
            expense(4, "Concert", 75.00, Category::Entertainment),
        ]
    }

    #[test]
    fn test_category_parse_and_display_round_trip() {
        for category in Category::ALL {
            let parsed: Category = category.name().parse().unwrap();
            assert_eq!(parsed, category);
            assert_eq!(parsed.to_string(), category.name());
        }
    }

    #[test]
    fn test_category_rejects_unknown_names() {
        assert!("Groceries".parse::<Category>().is_err());
        assert!("food".parse::<Category>().is_err());
        assert!("".parse::<Category>().is_err());
    }

    #[test]
    fn test_filter_parse() {
        assert_eq!("All".parse::<CategoryFilter>().unwrap(), CategoryFilter::All);
        assert_eq!(
            "Transportation".parse::<CategoryFilter>().unwrap(),
            CategoryFilter::Category(Category::Transportation)
        );
        assert!("Everything".parse::<CategoryFilter>().is_err());
    }

    #[test]
    fn test_filter_all_is_identity() {
        let expenses = sample_expenses();
        let view = filter_expenses(&expenses, &CategoryFilter::All);
        assert_eq!(view, expenses);
    }

    #[test]
    fn test_filter_by_category_keeps_matching_subsequence_in_order() {
        let expenses = sample_expenses();
        let view = filter_expenses(&expenses, &CategoryFilter::Category(Category::Food));
        assert_eq!(view.len(), 2);
        assert_eq!(view[0].description, "Groceries");
        assert_eq!(view[1].description, "Coffee");
    }

    #[test]
    fn test_filter_is_idempotent() {
        let expenses = sample_expenses();
        let filter = CategoryFilter::Category(Category::Food);
        let once = filter_expenses(&expenses, &filter);
        let twice = filter_expenses(&once, &filter);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_filter_with_no_matches_is_empty() {
        let expenses = vec![expense(1, "Groceries", 42.10, Category::Food)];
        let view = filter_expenses(&expenses, &CategoryFilter::Category(Category::Other));
        assert!(view.is_empty());
    }

    #[test]
    fn test_total_sums_the_filtered_view() {
        let expenses = sample_expenses();
        assert!((total_amount(&expenses) - 146.60).abs() < 1e-9);

        let food = filter_expenses(&expenses, &CategoryFilter::Category(Category::Food));
        assert!((total_amount(&food) - 46.60).abs() < 1e-9);
        assert!(total_amount(&[]).abs() < f64::EPSILON);
    }

    #[test]
    fn test_next_expense_id() {
        assert_eq!(next_expense_id(&[]), 1);
        assert_eq!(next_expense_id(&sample_expenses()), 5);

        // Ids need not be contiguous; the next id is one past the highest.
        let sparse = vec![expense(7, "Groceries", 10.0, Category::Food)];
        assert_eq!(next_expense_id(&sparse), 8);
    }

    #[test]
    fn test_remove_expense_by_id() {
        let expenses = sample_expenses();
        let remaining = remove_expense(&expenses, 2);
        assert_eq!(remaining.len(), 3);
        assert!(remaining.iter().all(|e| e.id != 2));
        assert_eq!(remaining[0].id, 1);
        assert_eq!(remaining[1].id, 3);

        // Unknown id leaves the collection unchanged.
        assert_eq!(remove_expense(&expenses, 99), expenses);
    }

    #[test]
    fn test_expense_from_new_assigns_the_given_id() {
        let payload = NewExpense {
            description: "Coffee".to_string(),
            amount: 4.5,
            category: Category::Food,
            date: "2024-01-15".to_string(),
        };
        let record = Expense::from_new(12, payload);
        assert_eq!(record.id, 12);
        assert_eq!(record.description, "Coffee");
        assert_eq!(record.amount, 4.5);
        assert_eq!(record.category, Category::Food);
        assert_eq!(record.date, "2024-01-15");
    }

    #[test]
    fn test_large_expense_threshold() {
        assert!(expense(1, "Concert", 75.0, Category::Entertainment).is_large());
        assert!(!expense(2, "Coffee", 4.5, Category::Food).is_large());
        // Exactly at the threshold does not highlight.
        assert!(!expense(3, "Dinner", 50.0, Category::Food).is_large());
    }

    #[test]
    fn test_validate_accepts_a_valid_draft() {
        let draft = ExpenseDraft {
            description: "Coffee".to_string(),
            amount: "4.50".to_string(),
            category: "Food".to_string(),
            date: "2024-01-15".to_string(),
        };
        let result = validate_draft(&draft);
        assert!(result.is_valid);
        assert!(result.errors.is_empty());

        let payload = result.payload.unwrap();
        assert_eq!(payload.description, "Coffee");
        assert_eq!(payload.amount, 4.5);
        assert_eq!(payload.category, Category::Food);
        assert_eq!(payload.date, "2024-01-15");
    }

    #[test]
    fn test_validate_trims_the_description() {
        let draft = ExpenseDraft {
            description: "  Coffee  ".to_string(),
            amount: "4.50".to_string(),
            category: "Food".to_string(),
            date: "2024-01-15".to_string(),
        };
        let result = validate_draft(&draft);
        assert_eq!(result.payload.unwrap().description, "Coffee");
    }

    #[test]
    fn test_validate_collects_all_errors_together() {
        let draft = ExpenseDraft {
            description: "  ".to_string(),
            amount: "-3".to_string(),
            category: "Food".to_string(),
            date: String::new(),
        };
        let result = validate_draft(&draft);
        assert!(!result.is_valid);
        assert!(result.payload.is_none());
        assert_eq!(result.errors.len(), 3);
        assert!(result.errors.contains(&ValidationError::EmptyDescription));
        assert!(result.errors.contains(&ValidationError::AmountNotPositive));
        assert!(result.errors.contains(&ValidationError::EmptyDate));
    }

    #[test]
    fn test_validate_rejects_bad_amounts() {
        let mut draft = ExpenseDraft {
            description: "Coffee".to_string(),
            amount: String::new(),
            category: "Food".to_string(),
            date: "2024-01-15".to_string(),
        };
        assert!(validate_draft(&draft)
            .errors
            .contains(&ValidationError::EmptyAmount));

        draft.amount = "abc".to_string();
        assert!(validate_draft(&draft)
            .errors
            .contains(&ValidationError::InvalidAmount("abc".to_string())));

        draft.amount = "inf".to_string();
        assert!(validate_draft(&draft)
            .errors
            .contains(&ValidationError::InvalidAmount("inf".to_string())));

        draft.amount = "NaN".to_string();
        assert!(validate_draft(&draft)
            .errors
            .contains(&ValidationError::InvalidAmount("NaN".to_string())));

        draft.amount = "0".to_string();
        assert!(validate_draft(&draft)
            .errors
            .contains(&ValidationError::AmountNotPositive));
    }

    #[test]
    fn test_validate_rejects_unknown_categories() {
        let draft = ExpenseDraft {
            description: "Coffee".to_string(),
            amount: "4.50".to_string(),
            category: "Snacks".to_string(),
            date: "2024-01-15".to_string(),
        };
        let result = validate_draft(&draft);
        assert!(!result.is_valid);
        assert_eq!(
            result.errors,
            vec![ValidationError::UnknownCategory("Snacks".to_string())]
        );
    }

    #[test]
    fn test_draft_default_matches_the_reset_contract() {
        let draft = ExpenseDraft::default();
        assert_eq!(draft.description, "");
        assert_eq!(draft.amount, "");
        assert_eq!(draft.category, "Food");
        assert_eq!(draft.date, current_date_string());
    }

    #[test]
    fn test_current_date_string_format() {
        let today = current_date_string();
        assert_eq!(today.len(), 10);
        let parts: Vec<&str> = today.split('-').collect();
        assert_eq!(parts.len(), 3);
        assert!(parts.iter().all(|p| p.chars().all(|c| c.is_ascii_digit())));
    }

    #[test]
    fn test_field_errors_clear_is_per_field() {
        let errors = vec![
            ValidationError::EmptyDescription,
            ValidationError::AmountNotPositive,
            ValidationError::EmptyDate,
        ];
        let mut field_errors = FieldErrors::from_errors(&errors);
        assert!(!field_errors.is_empty());
        assert!(field_errors.get(ExpenseField::Description).is_some());
        assert!(field_errors.get(ExpenseField::Amount).is_some());
        assert!(field_errors.get(ExpenseField::Date).is_some());
        assert!(field_errors.get(ExpenseField::Category).is_none());

        // Editing one field clears only that field's message.
        field_errors.clear(ExpenseField::Amount);
        assert!(field_errors.get(ExpenseField::Amount).is_none());
        assert!(field_errors.get(ExpenseField::Description).is_some());
        assert!(field_errors.get(ExpenseField::Date).is_some());

        field_errors.clear(ExpenseField::Description);
        field_errors.clear(ExpenseField::Date);
        assert!(field_errors.is_empty());
    }

    #[test]
    fn test_validation_error_messages_are_user_facing() {
        assert_eq!(
            ValidationError::EmptyDescription.to_string(),
            "Description is required"
        );
        assert_eq!(
            ValidationError::InvalidAmount("abc".to_string()).to_string(),
            "'abc' is not a valid amount"
        );
        assert_eq!(
            ValidationError::UnknownCategory("Snacks".to_string()).to_string(),
            "'Snacks' is not a recognized category"
        );
    }
}
