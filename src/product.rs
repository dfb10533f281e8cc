//! Import records and the product entity they map onto

use crate::error::ImportError;
use std::collections::HashMap;

/// One data line of an import file, keyed by the header's field names
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportRecord {
    fields: HashMap<String, String>,
    line: u64,
}

impl ImportRecord {
    /// Zip header names with line values
    ///
    /// When a name repeats in the header, its first occurrence wins.
    pub fn from_fields<'a>(
        names: impl IntoIterator<Item = &'a str>,
        values: impl IntoIterator<Item = &'a str>,
        line: u64,
    ) -> Self {
        let mut fields = HashMap::new();
        for (name, value) in names.into_iter().zip(values) {
            fields
                .entry(name.to_string())
                .or_insert_with(|| value.to_string());
        }
        Self { fields, line }
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    /// 1-based line number in the source file
    pub fn line(&self) -> u64 {
        self.line
    }

    fn require(&self, field: &'static str) -> Result<&str, ImportError> {
        self.get(field).ok_or(ImportError::MissingField {
            field,
            line: self.line,
        })
    }

    fn require_int(&self, field: &'static str) -> Result<i64, ImportError> {
        let value = self.require(field)?;
        value
            .trim()
            .parse()
            .map_err(|_| ImportError::InvalidValue {
                field,
                value: value.to_string(),
                line: self.line,
            })
    }
}

/// A product row in the `product` table
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Product {
    /// Caller-supplied primary key
    pub id: i64,
    pub name: String,
    pub description: String,
    /// Price in the smallest currency unit
    pub price: i64,
    #[sqlx(rename = "taxRate")]
    pub tax_rate: i64,
}

impl TryFrom<ImportRecord> for Product {
    type Error = ImportError;

    fn try_from(record: ImportRecord) -> Result<Self, Self::Error> {
        Ok(Self {
            id: record.require_int("id")?,
            name: record.require("name")?.to_string(),
            description: record.require("description")?.to_string(),
            price: record.require_int("price")?,
            tax_rate: record.require_int("taxRate")?,
        })
    }
}
