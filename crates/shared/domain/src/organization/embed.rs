use super::{Account, Rank, Unit};
use std::fmt;

/// Records that carry their own store-assigned identifier.
pub trait Identified {
    fn id(&self) -> Option<&str>;
}

impl Identified for Unit {
    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

impl Identified for Account {
    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

impl Identified for Rank {
    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

/// One of the id/embed pairs carried by a [`Rank`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Relation {
    Unit,
    Creator,
    Modifier,
}

impl Relation {
    pub const ALL: [Self; 3] = [Self::Unit, Self::Creator, Self::Modifier];

    /// Wire name of the foreign-key half.
    #[must_use]
    pub const fn id_field(self) -> &'static str {
        match self {
            Self::Unit => "unitId",
            Self::Creator => "creatorId",
            Self::Modifier => "modifierId",
        }
    }

    /// Wire name of the embedded half.
    #[must_use]
    pub const fn embed_field(self) -> &'static str {
        match self {
            Self::Unit => "unit",
            Self::Creator => "creator",
            Self::Modifier => "modifier",
        }
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.embed_field())
    }
}

/// Both halves of a relation are present but name different records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbedMismatch {
    pub relation: Relation,
    pub id: String,
    pub embedded_id: String,
}

impl fmt::Display for EmbedMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} is '{}' but embedded {} has id '{}'",
            self.relation.id_field(),
            self.id,
            self.relation.embed_field(),
            self.embedded_id
        )
    }
}

impl Rank {
    fn halves(&self, relation: Relation) -> (Option<&str>, Option<&str>) {
        match relation {
            Relation::Unit => (self.unit_id.as_deref(), self.unit.as_ref().and_then(Identified::id)),
            Relation::Creator => {
                (self.creator_id.as_deref(), self.creator.as_ref().and_then(Identified::id))
            }
            Relation::Modifier => {
                (self.modifier_id.as_deref(), self.modifier.as_ref().and_then(Identified::id))
            }
        }
    }

    /// Identifier of the related record.
    ///
    /// The `..._id` field wins; the embed's id is used only when that field is absent.
    #[must_use]
    pub fn relation_id(&self, relation: Relation) -> Option<&str> {
        let (id, embedded) = self.halves(relation);
        id.or(embedded)
    }

    #[must_use]
    pub fn unit_ref(&self) -> Option<&str> {
        self.relation_id(Relation::Unit)
    }

    #[must_use]
    pub fn creator_ref(&self) -> Option<&str> {
        self.relation_id(Relation::Creator)
    }

    #[must_use]
    pub fn modifier_ref(&self) -> Option<&str> {
        self.relation_id(Relation::Modifier)
    }

    /// Lists relations whose embed disagrees with the foreign key.
    ///
    /// A pair with either half missing, or an embed without an id, is never reported.
    #[must_use]
    pub fn stale_embeds(&self) -> Vec<EmbedMismatch> {
        Relation::ALL
            .into_iter()
            .filter_map(|relation| match self.halves(relation) {
                (Some(id), Some(embedded_id)) if id != embedded_id => Some(EmbedMismatch {
                    relation,
                    id: id.to_owned(),
                    embedded_id: embedded_id.to_owned(),
                }),
                _ => None,
            })
            .collect()
    }
}
