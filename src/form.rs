//! Form State
//!
//! Submit-time snapshot of the shared create/edit form. The only form state
//! machine is here: an item form with an id updates, one without creates.

use crate::models::ItemFields;

/// Field values of the item form when submit fires
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemForm {
    pub id: Option<u32>,
    pub name: String,
    pub price: String,
    pub image: String,
    pub category: String,
}

/// Which request a form submit maps to
#[derive(Debug, Clone, PartialEq)]
pub enum Submission {
    Create(ItemFields),
    Update(u32, ItemFields),
}

impl ItemForm {
    /// Decide the operation from id presence alone
    pub fn submission(&self) -> Submission {
        let fields = ItemFields {
            name: self.name.clone(),
            price: self.price.parse().unwrap_or(0.0),
            image: self.image.clone(),
            category: self.category.clone(),
        };
        match self.id {
            Some(id) => Submission::Update(id, fields),
            None => Submission::Create(fields),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_form(id: Option<u32>) -> ItemForm {
        ItemForm {
            id,
            name: "Cup".to_string(),
            price: "500".to_string(),
            image: "x.jpg".to_string(),
            category: "kitchen".to_string(),
        }
    }

    #[test]
    fn test_submission_without_id_is_create() {
        let form = make_form(None);

        match form.submission() {
            Submission::Create(fields) => {
                assert_eq!(fields.name, "Cup");
                assert_eq!(fields.price, 500.0);
                assert_eq!(fields.image, "x.jpg");
                assert_eq!(fields.category, "kitchen");
            }
            other => panic!("expected create, got {other:?}"),
        }
    }

    #[test]
    fn test_submission_with_id_is_update() {
        let form = make_form(Some(7));

        match form.submission() {
            Submission::Update(id, fields) => {
                assert_eq!(id, 7);
                assert_eq!(fields.price, 500.0);
            }
            other => panic!("expected update, got {other:?}"),
        }
    }

    #[test]
    fn test_price_parses_decimal_input() {
        let mut form = make_form(None);
        form.price = "1234.5".to_string();

        let Submission::Create(fields) = form.submission() else {
            panic!("expected create");
        };
        assert_eq!(fields.price, 1234.5);
    }

    #[test]
    fn test_unparsable_price_falls_back_to_zero() {
        let mut form = make_form(None);
        form.price = String::new();

        let Submission::Create(fields) = form.submission() else {
            panic!("expected create");
        };
        assert_eq!(fields.price, 0.0);
    }
}
