//! `SeaORM` entities for the ledger tables.

pub mod budgets;
pub mod expenses;
pub mod income;
pub mod investments;
pub mod savings_goals;

pub mod prelude {
    //! Entity aliases.

    pub use super::budgets::Entity as Budgets;
    pub use super::expenses::Entity as Expenses;
    pub use super::income::Entity as Income;
    pub use super::investments::Entity as Investments;
    pub use super::savings_goals::Entity as SavingsGoals;
}
