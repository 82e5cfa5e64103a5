// src/domain/category.rs
//! Closed category/subcategory enumeration for published articles.
//!
//! The table is plain configuration: components that need it receive a
//! `CategoryTable` value instead of reaching for a global, so tests can run
//! against alternate tables.

use crate::domain::errors::{DomainError, DomainResult};
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryInfo {
    pub name: String,
    pub page: String,
    pub subcategories: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub key: String,
    pub info: CategoryInfo,
}

impl Category {
    pub fn new(key: &str, name: &str, subcategories: &[&str]) -> Self {
        Self {
            key: key.to_string(),
            info: CategoryInfo {
                name: name.to_string(),
                page: format!("legal-knowledge.html#{key}"),
                subcategories: subcategories.iter().map(|s| (*s).to_string()).collect(),
            },
        }
    }

    pub fn name(&self) -> &str {
        &self.info.name
    }

    pub fn page(&self) -> &str {
        &self.info.page
    }

    pub fn allows(&self, subcategory: &str) -> bool {
        self.info.subcategories.iter().any(|s| s == subcategory)
    }
}

/// Ordered category table. Serialized as a JSON object keyed by category,
/// keeping declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTable {
    categories: Vec<Category>,
}

impl CategoryTable {
    pub fn new(categories: Vec<Category>) -> Self {
        Self { categories }
    }

    /// The site's eight practice areas with four subcategories each.
    pub fn standard() -> Self {
        Self::new(vec![
            Category::new(
                "inheritance",
                "繼承法",
                &["tax-planning", "registration", "disputes", "wills"],
            ),
            Category::new(
                "real-estate",
                "不動產法",
                &["transactions", "mortgages", "disputes", "registration"],
            ),
            Category::new(
                "family-law",
                "家事法",
                &["divorce", "custody", "property", "support"],
            ),
            Category::new(
                "civil-law",
                "民事法",
                &["contracts", "torts", "property", "obligations"],
            ),
            Category::new(
                "criminal-law",
                "刑事法",
                &["crimes", "procedures", "evidence", "penalties"],
            ),
            Category::new(
                "corporate-law",
                "公司法",
                &["formation", "governance", "securities", "mergers"],
            ),
            Category::new(
                "labor-law",
                "勞動法",
                &["employment", "disputes", "benefits", "safety"],
            ),
            Category::new(
                "tax-law",
                "稅法",
                &["income", "estate", "corporate", "international"],
            ),
        ])
    }

    pub fn get(&self, key: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.key == key)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Category> {
        self.categories.iter()
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Display name for a category key, falling back to the key itself.
    pub fn display_name<'a>(&'a self, key: &'a str) -> &'a str {
        self.get(key).map_or(key, Category::name)
    }

    /// Check a (category, subcategory) pair against the table.
    pub fn validate(&self, category: &str, subcategory: &str) -> DomainResult<&Category> {
        let entry = self
            .get(category)
            .ok_or_else(|| DomainError::InvalidCategory(category.to_string()))?;
        if !entry.allows(subcategory) {
            return Err(DomainError::InvalidSubcategory {
                category: category.to_string(),
                subcategory: subcategory.to_string(),
            });
        }
        Ok(entry)
    }
}

impl Default for CategoryTable {
    fn default() -> Self {
        Self::standard()
    }
}

impl Serialize for CategoryTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.categories.len()))?;
        for category in &self.categories {
            map.serialize_entry(&category.key, &category.info)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for CategoryTable {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct TableVisitor;

        impl<'de> Visitor<'de> for TableVisitor {
            type Value = CategoryTable;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of category keys to category definitions")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut categories = Vec::new();
                while let Some((key, info)) = access.next_entry::<String, CategoryInfo>()? {
                    categories.push(Category { key, info });
                }
                Ok(CategoryTable { categories })
            }
        }

        deserializer.deserialize_map(TableVisitor)
    }
}
