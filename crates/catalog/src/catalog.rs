use serde::Serialize;

use stockroom_core::{
    Aggregate, AggregateRoot, DomainError, DomainResult, Entity, IdSequence, ItemId, ValueObject,
};

use crate::item::{Item, NewItem};

/// Aggregate root: Catalog.
///
/// Owns every item and the identifier counter. Items are kept in insertion
/// order, which is also identifier order and enumeration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    name: String,
    items: Vec<Item>,
    ids: IdSequence,
    version: u64,
}

impl Catalog {
    pub const DEFAULT_NAME: &'static str = "default";

    pub fn new() -> Self {
        Self::named(Self::DEFAULT_NAME)
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            items: Vec::new(),
            ids: IdSequence::new(),
            version: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Append a new item and return the identifier assigned to it.
    pub fn insert_item(&mut self, new_item: NewItem) -> ItemId {
        let id = self.ids.peek();
        let event = CatalogEvent::ItemInserted(Item::create(id, new_item));
        self.apply(&event);

        tracing::debug!(
            catalog = %self.name,
            event = event.event_type(),
            item_id = %id,
            "item inserted"
        );
        id
    }

    /// Replace the quantity of item `id`.
    ///
    /// Returns [`DomainError::ItemNotFound`] (leaving the catalog untouched)
    /// when no item carries that identifier.
    pub fn update_quantity(&mut self, id: ItemId, quantity: i64) -> DomainResult<StockUpdate> {
        let events = match self.execute(&CatalogCommand::UpdateQuantity { id, quantity }) {
            Ok(events) => events,
            Err(err) => {
                tracing::debug!(catalog = %self.name, item_id = %id, "quantity update: {err}");
                return Err(err);
            }
        };

        let Some(event @ CatalogEvent::QuantityUpdated { previous, .. }) = events.first() else {
            return Err(DomainError::invariant("quantity update emitted no event"));
        };
        let name = self
            .get(id)
            .map(|item| item.name().to_string())
            .ok_or_else(|| DomainError::invariant("updated item vanished"))?;

        tracing::debug!(
            catalog = %self.name,
            event = event.event_type(),
            item_id = %id,
            previous = *previous,
            quantity,
            "quantity updated"
        );

        Ok(StockUpdate {
            id,
            name,
            previous: *previous,
            quantity,
        })
    }

    /// Point lookup by identifier (linear scan in insertion order).
    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.has_id(&id))
    }

    /// All items in insertion order. Can be called again at any time.
    pub fn list_items(&self) -> core::slice::Iter<'_, Item> {
        self.items.iter()
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Sum of `unit_cost × quantity` over all items; zero when empty.
    pub fn total_value(&self) -> i128 {
        self.items.iter().map(Item::value).sum()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Identifier the next insertion will receive.
    pub fn next_id(&self) -> ItemId {
        self.ids.peek()
    }

    fn position(&self, id: ItemId) -> Option<usize> {
        self.items.iter().position(|item| item.has_id(&id))
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Item;
    type IntoIter = core::slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.list_items()
    }
}

impl AggregateRoot for Catalog {
    type Id = String;

    fn id(&self) -> &Self::Id {
        &self.name
    }

    fn version(&self) -> u64 {
        self.version
    }
}

/// Outcome of a successful quantity update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StockUpdate {
    pub id: ItemId,
    pub name: String,
    pub previous: i64,
    pub quantity: i64,
}

impl ValueObject for StockUpdate {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogCommand {
    InsertItem(NewItem),
    UpdateQuantity { id: ItemId, quantity: i64 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogEvent {
    ItemInserted(Item),
    QuantityUpdated {
        id: ItemId,
        previous: i64,
        quantity: i64,
    },
}

impl CatalogEvent {
    /// Stable event name (e.g. "catalog.item.inserted").
    pub fn event_type(&self) -> &'static str {
        match self {
            CatalogEvent::ItemInserted(_) => "catalog.item.inserted",
            CatalogEvent::QuantityUpdated { .. } => "catalog.item.quantity_updated",
        }
    }
}

impl Aggregate for Catalog {
    type Command = CatalogCommand;
    type Event = CatalogEvent;
    type Error = DomainError;

    fn apply(&mut self, event: &Self::Event) {
        match event {
            CatalogEvent::ItemInserted(item) => {
                // Keep the counter in lockstep with the identifiers handed out.
                let id = self.ids.next_id();
                debug_assert_eq!(id, item.id_typed());
                self.items.push(item.clone());
            }
            CatalogEvent::QuantityUpdated { id, quantity, .. } => {
                if let Some(index) = self.position(*id) {
                    self.items[index].set_quantity(*quantity);
                }
            }
        }

        self.version += 1;
    }

    fn handle(&self, command: &Self::Command) -> Result<Vec<Self::Event>, Self::Error> {
        match command {
            CatalogCommand::InsertItem(new_item) => Ok(vec![CatalogEvent::ItemInserted(
                Item::create(self.ids.peek(), new_item.clone()),
            )]),
            CatalogCommand::UpdateQuantity { id, quantity } => {
                let item = self.get(*id).ok_or(DomainError::item_not_found(*id))?;
                Ok(vec![CatalogEvent::QuantityUpdated {
                    id: *id,
                    previous: item.quantity(),
                    quantity: *quantity,
                }])
            }
        }
    }
}
