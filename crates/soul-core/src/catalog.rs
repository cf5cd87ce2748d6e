//! The deed catalog: good and bad deeds the user can record.
//!
//! The catalog starts from a small set of stock deeds and grows as the user
//! enters their own. It owns deed lifecycle (ids, timestamps, validation);
//! the garden engine only ever sees a deed's id and points.

use chrono::Utc;

use soul_types::{BadDeed, BadDeedCategory, DeedId, GoodDeed, GoodDeedCategory, NewDeed};

/// Errors raised when a new deed fails validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    /// The title was empty after trimming whitespace.
    #[error("deed title must not be empty")]
    EmptyTitle,

    /// The description was empty after trimming whitespace.
    #[error("deed description must not be empty")]
    EmptyDescription,
}

/// In-memory catalog of good and bad deeds, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeedCatalog {
    good: Vec<GoodDeed>,
    bad: Vec<BadDeed>,
}

impl DeedCatalog {
    /// Create an empty catalog.
    pub const fn new() -> Self {
        Self {
            good: Vec::new(),
            bad: Vec::new(),
        }
    }

    /// Create a catalog holding the stock deeds.
    pub fn with_defaults() -> Self {
        let now = Utc::now();
        let good = [
            ("Prayer", "Praying at the appointed time", 10, GoodDeedCategory::Prayer),
            (
                "Helping those in need",
                "Material or spiritual help for someone in need",
                15,
                GoodDeedCategory::Charity,
            ),
            (
                "Honouring parents",
                "Respecting and obeying one's mother and father",
                20,
                GoodDeedCategory::Kindness,
            ),
            (
                "Reading the Quran",
                "Reading and reflecting on the verses",
                12,
                GoodDeedCategory::Learning,
            ),
        ]
        .into_iter()
        .map(|(title, description, points, category)| GoodDeed {
            id: DeedId::new(),
            title: title.to_owned(),
            description: description.to_owned(),
            points,
            category,
            created_at: now,
        })
        .collect();

        let bad = [
            ("Anger", "Failing to control one's temper", -8, BadDeedCategory::Anger),
            ("Envy", "Envying what others have", -10, BadDeedCategory::Greed),
            ("Laziness", "Leaving duties and work undone", -5, BadDeedCategory::Laziness),
            (
                "Lying",
                "Telling lies and being dishonest",
                -12,
                BadDeedCategory::Dishonesty,
            ),
        ]
        .into_iter()
        .map(|(title, description, points, category)| BadDeed {
            id: DeedId::new(),
            title: title.to_owned(),
            description: description.to_owned(),
            points,
            category,
            created_at: now,
        })
        .collect();

        Self { good, bad }
    }

    /// All good deeds.
    pub fn good_deeds(&self) -> &[GoodDeed] {
        &self.good
    }

    /// All bad deeds.
    pub fn bad_deeds(&self) -> &[BadDeed] {
        &self.bad
    }

    /// Look up a good deed by id.
    pub fn good_deed(&self, id: DeedId) -> Option<&GoodDeed> {
        self.good.iter().find(|deed| deed.id == id)
    }

    /// Look up a bad deed by id.
    pub fn bad_deed(&self, id: DeedId) -> Option<&BadDeed> {
        self.bad.iter().find(|deed| deed.id == id)
    }

    /// Good deeds in the given category.
    pub fn good_deeds_by_category(
        &self,
        category: GoodDeedCategory,
    ) -> impl Iterator<Item = &GoodDeed> {
        self.good.iter().filter(move |deed| deed.category == category)
    }

    /// Bad deeds in the given category.
    pub fn bad_deeds_by_category(
        &self,
        category: BadDeedCategory,
    ) -> impl Iterator<Item = &BadDeed> {
        self.bad.iter().filter(move |deed| deed.category == category)
    }

    /// Add a good deed, assigning a fresh id and timestamp.
    ///
    /// Title and description are trimmed. Points are stored as given.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::EmptyTitle`] or
    /// [`CatalogError::EmptyDescription`] when either is blank.
    pub fn add_good_deed(
        &mut self,
        input: NewDeed<GoodDeedCategory>,
    ) -> Result<GoodDeed, CatalogError> {
        let (title, description) = normalize_text(&input.title, &input.description)?;
        let deed = GoodDeed {
            id: DeedId::new(),
            title,
            description,
            points: input.points,
            category: input.category,
            created_at: Utc::now(),
        };
        self.good.push(deed.clone());
        Ok(deed)
    }

    /// Add a bad deed, assigning a fresh id and timestamp.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::EmptyTitle`] or
    /// [`CatalogError::EmptyDescription`] when either is blank.
    pub fn add_bad_deed(
        &mut self,
        input: NewDeed<BadDeedCategory>,
    ) -> Result<BadDeed, CatalogError> {
        let (title, description) = normalize_text(&input.title, &input.description)?;
        let deed = BadDeed {
            id: DeedId::new(),
            title,
            description,
            points: input.points,
            category: input.category,
            created_at: Utc::now(),
        };
        self.bad.push(deed.clone());
        Ok(deed)
    }
}

fn normalize_text(title: &str, description: &str) -> Result<(String, String), CatalogError> {
    let title = title.trim();
    if title.is_empty() {
        return Err(CatalogError::EmptyTitle);
    }
    let description = description.trim();
    if description.is_empty() {
        return Err(CatalogError::EmptyDescription);
    }
    Ok((title.to_owned(), description.to_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_good(title: &str, description: &str) -> NewDeed<GoodDeedCategory> {
        NewDeed {
            title: title.to_owned(),
            description: description.to_owned(),
            points: 10,
            category: GoodDeedCategory::Other,
        }
    }

    #[test]
    fn defaults_hold_four_of_each() {
        let catalog = DeedCatalog::with_defaults();
        assert_eq!(catalog.good_deeds().len(), 4);
        assert_eq!(catalog.bad_deeds().len(), 4);
        assert!(catalog.good_deeds().iter().all(|d| d.points > 0));
        assert!(catalog.bad_deeds().iter().all(|d| d.points < 0));
    }

    #[test]
    fn default_points_match_stock_values() {
        let catalog = DeedCatalog::with_defaults();
        let good: Vec<i64> = catalog.good_deeds().iter().map(|d| d.points).collect();
        let bad: Vec<i64> = catalog.bad_deeds().iter().map(|d| d.points).collect();
        assert_eq!(good, vec![10, 15, 20, 12]);
        assert_eq!(bad, vec![-8, -10, -5, -12]);
    }

    #[test]
    fn add_good_deed_assigns_id_and_trims() {
        let mut catalog = DeedCatalog::new();
        let Ok(deed) = catalog.add_good_deed(new_good("  Fasting ", " Kept the fast  ")) else {
            panic!("valid deed was rejected");
        };
        assert_eq!(deed.title, "Fasting");
        assert_eq!(deed.description, "Kept the fast");
        assert_eq!(catalog.good_deed(deed.id), Some(&deed));
        assert_eq!(catalog.good_deeds().len(), 1);
    }

    #[test]
    fn blank_title_is_rejected() {
        let mut catalog = DeedCatalog::new();
        let result = catalog.add_good_deed(new_good("   ", "something"));
        assert_eq!(result, Err(CatalogError::EmptyTitle));
        assert!(catalog.good_deeds().is_empty());
    }

    #[test]
    fn blank_description_is_rejected() {
        let mut catalog = DeedCatalog::new();
        let result = catalog.add_bad_deed(NewDeed {
            title: String::from("Gossip"),
            description: String::new(),
            points: -10,
            category: BadDeedCategory::Other,
        });
        assert_eq!(result, Err(CatalogError::EmptyDescription));
        assert!(catalog.bad_deeds().is_empty());
    }

    #[test]
    fn points_are_not_validated() {
        let mut catalog = DeedCatalog::new();
        let mut input = new_good("Odd", "Negative good deed");
        input.points = -3;
        let deed = catalog.add_good_deed(input);
        assert_eq!(deed.map(|d| d.points), Ok(-3));
    }

    #[test]
    fn filter_by_category() {
        let catalog = DeedCatalog::with_defaults();
        assert_eq!(catalog.good_deeds_by_category(GoodDeedCategory::Prayer).count(), 1);
        assert_eq!(catalog.good_deeds_by_category(GoodDeedCategory::Other).count(), 0);
        assert_eq!(catalog.bad_deeds_by_category(BadDeedCategory::Dishonesty).count(), 1);
    }

    #[test]
    fn unknown_ids_are_not_found() {
        let catalog = DeedCatalog::with_defaults();
        assert!(catalog.good_deed(DeedId::new()).is_none());
        let bad_id = catalog.bad_deeds().first().map(|d| d.id);
        assert!(bad_id.is_some_and(|id| catalog.good_deed(id).is_none()));
    }
}
