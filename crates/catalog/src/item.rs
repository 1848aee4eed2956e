use serde::{Deserialize, Serialize};

use stockroom_core::{Entity, ItemId, ValueObject};

/// Everything needed to create an item, minus the identifier the catalog assigns.
///
/// `unit_cost` is in the smallest currency unit. Neither it nor `quantity` is
/// range-checked: negative values are stored as given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewItem {
    pub name: String,
    pub category: String,
    pub unit_cost: i64,
    pub quantity: i64,
}

impl NewItem {
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        unit_cost: i64,
        quantity: i64,
    ) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            unit_cost,
            quantity,
        }
    }
}

impl ValueObject for NewItem {}

/// Entity: one catalog entry.
///
/// Only the owning catalog can create an item or change its quantity; every
/// other field is fixed at creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Item {
    id: ItemId,
    name: String,
    category: String,
    unit_cost: i64,
    quantity: i64,
}

impl Item {
    pub(crate) fn create(id: ItemId, new_item: NewItem) -> Self {
        let NewItem {
            name,
            category,
            unit_cost,
            quantity,
        } = new_item;
        Self {
            id,
            name,
            category,
            unit_cost,
            quantity,
        }
    }

    pub(crate) fn set_quantity(&mut self, quantity: i64) {
        self.quantity = quantity;
    }

    pub fn id_typed(&self) -> ItemId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn unit_cost(&self) -> i64 {
        self.unit_cost
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    /// `unit_cost × quantity`, widened so the product cannot overflow.
    pub fn value(&self) -> i128 {
        i128::from(self.unit_cost) * i128::from(self.quantity)
    }
}

impl Entity for Item {
    type Id = ItemId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
