//! Category service
//!
//! Creates and looks up budget categories. New categories get the next colour
//! from the fixed palette, chosen by how many categories already exist.

use tracing::{info, warn};

use crate::error::{PlannerError, PlannerResult};
use crate::models::{Category, CategoryId, Money, DEFAULT_ICON};
use crate::storage::Storage;

/// Service for category management
pub struct CategoryService<'a> {
    storage: &'a Storage,
}

impl<'a> CategoryService<'a> {
    /// Create a new category service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Create a new category
    pub fn add(&self, name: &str, budget: Money, icon: Option<&str>) -> PlannerResult<Category> {
        let name = name.trim();
        let icon = icon
            .map(str::trim)
            .filter(|i| !i.is_empty())
            .unwrap_or(DEFAULT_ICON);

        let count = self.storage.with_state(|state| state.categories.len())?;
        let category = Category::new(name, budget, icon, Category::palette_color(count));

        category.validate().map_err(|e| {
            warn!(name = %name, error = %e, "rejected category");
            PlannerError::Validation(e.to_string())
        })?;

        if self.get_by_name(name)?.is_some() {
            // Names are unique by convention only
            warn!(name = %name, "adding a category whose name is already taken");
        }

        self.storage
            .update(|state| state.categories.push(category.clone()))?;
        self.storage.save()?;

        info!(id = %category.id, name = %category.name, color = %category.color, "added category");
        Ok(category)
    }

    pub fn get(&self, id: CategoryId) -> PlannerResult<Option<Category>> {
        self.storage
            .with_state(|state| state.categories.iter().find(|c| c.id == id).cloned())
    }

    /// Get a category by name (case-insensitive); the first match wins
    pub fn get_by_name(&self, name: &str) -> PlannerResult<Option<Category>> {
        let name = name.trim().to_lowercase();
        self.storage.with_state(|state| {
            state
                .categories
                .iter()
                .find(|c| c.name.to_lowercase() == name)
                .cloned()
        })
    }

    /// Find a category by name or ID string
    pub fn find(&self, identifier: &str) -> PlannerResult<Category> {
        if let Some(category) = self.get_by_name(identifier)? {
            return Ok(category);
        }

        let by_id = self.storage.with_state(|state| {
            state
                .categories
                .iter()
                .find(|c| c.id.matches_ref(identifier))
                .cloned()
        })?;

        by_id.ok_or_else(|| PlannerError::category_not_found(identifier))
    }

    /// All categories in stored order
    pub fn list(&self) -> PlannerResult<Vec<Category>> {
        self.storage.categories()
    }
}
