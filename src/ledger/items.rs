//! Named line items carried by the ledger

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::EngineError;

/// A single line of the operating statement or balance sheet
///
/// Wire names are camelCase (`netSales`, `termLoan`, ...) so historical
/// figures can be keyed the same way in JSON and CSV input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LineItem {
    // Operating statement inputs
    NetSales,
    OtherOperatingIncome,
    RawMaterials,
    DirectWages,
    PowerFuel,
    AdminSalary,
    Rent,
    SellingExpenses,
    OtherExpenses,
    Depreciation,
    Interest,

    // Profit waterfall
    GrossOperatingIncome,
    CostOfSales,
    Pbdit,
    Pbit,
    Pbt,
    Tax,
    Pat,

    // Liabilities
    ShareCapital,
    Reserves,
    UnsecuredLoan,
    TermLoan,
    SundryCreditors,
    OtherLiabilities,

    // Assets
    GrossFixedAssets,
    AccumulatedDepreciation,
    Investments,
    Inventory,
    SundryDebtors,
    OtherCurrentAssets,
    Cash,

    // Balance sheet totals
    NetWorth,
    OtherCurrentLiabilities,
    TotalLiabilities,
    NetFixedAssets,
    TotalCurrentAssets,
    TotalAssets,

    // Memo lines
    AssetAdditions,
    PrincipalRepayment,
}

impl LineItem {
    pub const ALL: [LineItem; 39] = [
        LineItem::NetSales,
        LineItem::OtherOperatingIncome,
        LineItem::RawMaterials,
        LineItem::DirectWages,
        LineItem::PowerFuel,
        LineItem::AdminSalary,
        LineItem::Rent,
        LineItem::SellingExpenses,
        LineItem::OtherExpenses,
        LineItem::Depreciation,
        LineItem::Interest,
        LineItem::GrossOperatingIncome,
        LineItem::CostOfSales,
        LineItem::Pbdit,
        LineItem::Pbit,
        LineItem::Pbt,
        LineItem::Tax,
        LineItem::Pat,
        LineItem::ShareCapital,
        LineItem::Reserves,
        LineItem::UnsecuredLoan,
        LineItem::TermLoan,
        LineItem::SundryCreditors,
        LineItem::OtherLiabilities,
        LineItem::GrossFixedAssets,
        LineItem::AccumulatedDepreciation,
        LineItem::Investments,
        LineItem::Inventory,
        LineItem::SundryDebtors,
        LineItem::OtherCurrentAssets,
        LineItem::Cash,
        LineItem::NetWorth,
        LineItem::OtherCurrentLiabilities,
        LineItem::TotalLiabilities,
        LineItem::NetFixedAssets,
        LineItem::TotalCurrentAssets,
        LineItem::TotalAssets,
        LineItem::AssetAdditions,
        LineItem::PrincipalRepayment,
    ];

    /// Revenue lines, grown by the revenue growth rate
    pub const REVENUE: [LineItem; 2] = [LineItem::NetSales, LineItem::OtherOperatingIncome];

    /// Cost lines, grown by the expense change rate
    pub const EXPENSES: [LineItem; 7] = [
        LineItem::RawMaterials,
        LineItem::DirectWages,
        LineItem::PowerFuel,
        LineItem::AdminSalary,
        LineItem::Rent,
        LineItem::SellingExpenses,
        LineItem::OtherExpenses,
    ];

    /// Wire name, e.g. `netSales`
    pub fn key(&self) -> &'static str {
        match self {
            LineItem::NetSales => "netSales",
            LineItem::OtherOperatingIncome => "otherOperatingIncome",
            LineItem::RawMaterials => "rawMaterials",
            LineItem::DirectWages => "directWages",
            LineItem::PowerFuel => "powerFuel",
            LineItem::AdminSalary => "adminSalary",
            LineItem::Rent => "rent",
            LineItem::SellingExpenses => "sellingExpenses",
            LineItem::OtherExpenses => "otherExpenses",
            LineItem::Depreciation => "depreciation",
            LineItem::Interest => "interest",
            LineItem::GrossOperatingIncome => "grossOperatingIncome",
            LineItem::CostOfSales => "costOfSales",
            LineItem::Pbdit => "pbdit",
            LineItem::Pbit => "pbit",
            LineItem::Pbt => "pbt",
            LineItem::Tax => "tax",
            LineItem::Pat => "pat",
            LineItem::ShareCapital => "shareCapital",
            LineItem::Reserves => "reserves",
            LineItem::UnsecuredLoan => "unsecuredLoan",
            LineItem::TermLoan => "termLoan",
            LineItem::SundryCreditors => "sundryCreditors",
            LineItem::OtherLiabilities => "otherLiabilities",
            LineItem::GrossFixedAssets => "grossFixedAssets",
            LineItem::AccumulatedDepreciation => "accumulatedDepreciation",
            LineItem::Investments => "investments",
            LineItem::Inventory => "inventory",
            LineItem::SundryDebtors => "sundryDebtors",
            LineItem::OtherCurrentAssets => "otherCurrentAssets",
            LineItem::Cash => "cash",
            LineItem::NetWorth => "netWorth",
            LineItem::OtherCurrentLiabilities => "otherCurrentLiabilities",
            LineItem::TotalLiabilities => "totalLiabilities",
            LineItem::NetFixedAssets => "netFixedAssets",
            LineItem::TotalCurrentAssets => "totalCurrentAssets",
            LineItem::TotalAssets => "totalAssets",
            LineItem::AssetAdditions => "assetAdditions",
            LineItem::PrincipalRepayment => "principalRepayment",
        }
    }

    /// Row label used in the rendered statements
    pub fn label(&self) -> &'static str {
        match self {
            LineItem::NetSales => "Net Sales",
            LineItem::OtherOperatingIncome => "Other Operating Income",
            LineItem::RawMaterials => "Raw Materials Consumed",
            LineItem::DirectWages => "Direct Wages",
            LineItem::PowerFuel => "Power & Fuel",
            LineItem::AdminSalary => "Administrative Salaries",
            LineItem::Rent => "Rent",
            LineItem::SellingExpenses => "Selling Expenses",
            LineItem::OtherExpenses => "Other Expenses",
            LineItem::Depreciation => "Depreciation",
            LineItem::Interest => "Interest",
            LineItem::GrossOperatingIncome => "Gross Operating Income",
            LineItem::CostOfSales => "Cost of Sales",
            LineItem::Pbdit => "PBDIT",
            LineItem::Pbit => "PBIT",
            LineItem::Pbt => "PBT",
            LineItem::Tax => "Tax",
            LineItem::Pat => "PAT",
            LineItem::ShareCapital => "Share Capital",
            LineItem::Reserves => "Reserves & Surplus",
            LineItem::UnsecuredLoan => "Unsecured Loans",
            LineItem::TermLoan => "Term Loan",
            LineItem::SundryCreditors => "Sundry Creditors",
            LineItem::OtherLiabilities => "Other Current Liabilities",
            LineItem::GrossFixedAssets => "Gross Fixed Assets",
            LineItem::AccumulatedDepreciation => "Less: Accumulated Depreciation",
            LineItem::Investments => "Investments",
            LineItem::Inventory => "Inventory",
            LineItem::SundryDebtors => "Sundry Debtors",
            LineItem::OtherCurrentAssets => "Other Current Assets",
            LineItem::Cash => "Cash & Bank Balance",
            LineItem::NetWorth => "Net Worth",
            LineItem::OtherCurrentLiabilities => "Total Current Liabilities (excl. bank)",
            LineItem::TotalLiabilities => "TOTAL LIABILITIES",
            LineItem::NetFixedAssets => "Net Fixed Assets",
            LineItem::TotalCurrentAssets => "Total Current Assets",
            LineItem::TotalAssets => "TOTAL ASSETS",
            LineItem::AssetAdditions => "Fixed Asset Additions",
            LineItem::PrincipalRepayment => "Principal Repayment Due",
        }
    }

    /// Lines computed by the engine rather than supplied as historical input
    pub fn is_derived(&self) -> bool {
        matches!(
            self,
            LineItem::GrossOperatingIncome
                | LineItem::CostOfSales
                | LineItem::Pbdit
                | LineItem::Pbit
                | LineItem::Pbt
                | LineItem::Tax
                | LineItem::Pat
                | LineItem::NetWorth
                | LineItem::OtherCurrentLiabilities
                | LineItem::TotalLiabilities
                | LineItem::NetFixedAssets
                | LineItem::TotalCurrentAssets
                | LineItem::TotalAssets
        )
    }
}

impl fmt::Display for LineItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for LineItem {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        LineItem::ALL
            .iter()
            .copied()
            .find(|item| item.key().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| EngineError::UnknownLineItem(wanted.to_string()))
    }
}
