//! School entities (branches of the school group) and content scoping.

/// One school of the group.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Entity {
    /// Short stable key.
    pub key: &'static str,
    /// Value used in content tag lists and persisted in storage.
    pub value: &'static str,
    /// Display name.
    pub name: &'static str,
}

/// Every school content can be scoped to.
pub const ENTIDADES: &[Entity] = &[
    Entity {
        key: "AEAS",
        value: "agrupamento",
        name: "Agrupamento de Escolas António Sérgio",
    },
    Entity {
        key: "ESAS",
        value: "secundaria-antonio-sergio",
        name: "Escola Secundária António Sérgio",
    },
    Entity {
        key: "EBAF",
        value: "eb-afonso-henriques",
        name: "Escola Básica D. Afonso Henriques",
    },
    Entity {
        key: "EBCM",
        value: "eb-cabo-mor",
        name: "Escola Básica de Cabo-Mor",
    },
    Entity {
        key: "JIVN",
        value: "ji-vila-nova",
        name: "Jardim de Infância de Vila Nova",
    },
];

impl Entity {
    /// Entity whose value equals `value`.
    #[must_use]
    pub fn by_value(value: &str) -> Option<Self> {
        ENTIDADES.iter().copied().find(|entity| entity.value == value)
    }
}

/// Anything that may be scoped to a set of entities.
pub trait EntityScoped {
    /// Entity values the item is tagged with; `None` means unscoped.
    fn entidades(&self) -> Option<&[String]>;
}

impl EntityScoped for aeas_models::ContentItem {
    fn entidades(&self) -> Option<&[String]> {
        self.entidades.as_deref()
    }
}

impl EntityScoped for aeas_models::FaqItem {
    fn entidades(&self) -> Option<&[String]> {
        self.entidades.as_deref()
    }
}

/// Whether `item` is visible while `selected` is active.
#[must_use]
pub fn is_visible<T: EntityScoped>(item: &T, selected: Option<&Entity>) -> bool {
    match (selected, item.entidades()) {
        (None, _) | (Some(_), None) => true,
        (Some(entity), Some(tags)) => tags.is_empty() || tags.iter().any(|tag| tag == entity.value),
    }
}

/// Items visible for `selected`, in their original order.
#[must_use]
pub fn filter_by_entity<T: EntityScoped + Clone>(items: &[T], selected: Option<&Entity>) -> Vec<T> {
    items
        .iter()
        .filter(|item| is_visible(*item, selected))
        .cloned()
        .collect()
}
