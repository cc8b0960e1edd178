//! Partition schemas: typed per-partition value stores addressed by marker types.
//!
//! A schema names the partitions of a [`PartitionedGraph`](super::PartitionedGraph)
//! and fixes the value type stored for each one. Partitions are addressed in
//! two ways:
//!
//! - at compile time through a zero-sized marker type implementing
//!   [`Partition`], which binds the partition to its index and value type;
//! - at runtime through a [`PartitionId`].
//!
//! Schemas are normally declared with [`partition_schema!`](crate::partition_schema).

use std::collections::HashMap;
use std::fmt;

/// Index of a partition within its schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PartitionId(usize);

impl PartitionId {
    /// Creates a partition ID from its zero-based index.
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the zero-based index of the partition.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for PartitionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<PartitionId> for usize {
    fn from(id: PartitionId) -> Self {
        id.0
    }
}

/// Describes the partitions of a graph whose vertices have type `V`.
pub trait PartitionSchema<V> {
    /// Number of partitions.
    const COUNT: usize;

    /// One `HashMap<V, T>` per partition, `T` being that partition's value type.
    type Stores: Default;

    /// Moves every entry of `from` into `into`, partition by partition.
    ///
    /// Entries already present in `into` keep their value.
    fn merge_stores(into: &mut Self::Stores, from: Self::Stores);
}

/// Binds a marker type to one partition of schema `S`.
///
/// `ID` must be below `S::COUNT` and unique within the schema; the
/// [`partition_schema!`](crate::partition_schema) macro checks both at compile time.
pub trait Partition<V, S: PartitionSchema<V>> {
    /// Position of the partition in the schema.
    const ID: PartitionId;

    /// Value type stored for each vertex of the partition.
    type Value;

    /// Returns this partition's store.
    fn values(stores: &S::Stores) -> &HashMap<V, Self::Value>;

    /// Returns this partition's store mutably.
    fn values_mut(stores: &mut S::Stores) -> &mut HashMap<V, Self::Value>;
}

/// Declares a partition schema and one marker type per partition.
///
/// Partitions are listed as `index => Marker(ValueType)` with indices starting
/// at 0 and increasing by one. The generated schema works for any vertex type
/// that is `Hash + Eq`. Up to 12 partitions are supported.
///
/// # Example
///
/// ```rust
/// use partigraph_core::{partition_schema, PartitionedGraph};
///
/// #[derive(Debug, Clone, PartialEq)]
/// pub struct Person {
///     name: String,
/// }
///
/// partition_schema! {
///     /// People and the weighted relations between them.
///     pub struct Social {
///         0 => People(Person),
///         1 => Relations(f32),
///     }
/// }
///
/// let mut graph: PartitionedGraph<u32, Social> = PartitionedGraph::new();
/// graph.add_vertex::<People>(0, Person { name: "Ada".into() }).unwrap();
/// graph.add_vertex::<Relations>(1, 0.5).unwrap();
/// graph.add_edge(0, 1).unwrap();
///
/// assert_eq!(graph.get_value::<Relations>(&1).unwrap(), &0.5);
/// ```
#[macro_export]
macro_rules! partition_schema {
    // Collect an attribute for the next partition entry.
    (@munch $m:tt $v:tt $s:tt [$($done:tt)*] [$($attrs:tt)*]
        #[$pm:meta] $($rest:tt)*
    ) => {
        $crate::partition_schema!(@munch $m $v $s [$($done)*] [$($attrs)* #[$pm]] $($rest)*);
    };
    // Collect a partition entry together with its attributes.
    (@munch $m:tt $v:tt $s:tt [$($done:tt)*] [$($attrs:tt)*]
        $idx:tt => $part:ident ( $value:ty ) $(, $($rest:tt)*)?
    ) => {
        $crate::partition_schema!(@munch $m $v $s
            [$($done)* { [$($attrs)*] $idx $part ($value) }] [] $($($rest)*)?);
    };
    (
        @munch [$(#[$meta:meta])*] [$vis:vis] [$schema:ident]
        [$( { [$(#[$pmeta:meta])*] $idx:tt $part:ident ( $value:ty ) } )+] []
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        $vis struct $schema;

        $(
            $(#[$pmeta])*
            #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
            $vis struct $part;
        )+

        const _: () = {
            let ids: &[usize] = &[$($idx),+];
            let mut i = 0;
            while i < ids.len() {
                assert!(ids[i] == i, "partition indices must count up from 0");
                i += 1;
            }
        };

        impl<V> $crate::partitioned::PartitionSchema<V> for $schema
        where
            V: ::core::hash::Hash + ::core::cmp::Eq,
        {
            const COUNT: usize = [$($idx),+].len();

            type Stores = ($(::std::collections::HashMap<V, $value>,)+);

            fn merge_stores(into: &mut Self::Stores, from: Self::Stores) {
                $(
                    for (vertex, value) in from.$idx {
                        into.$idx.entry(vertex).or_insert(value);
                    }
                )+
            }
        }

        $(
            impl<V> $crate::partitioned::Partition<V, $schema> for $part
            where
                V: ::core::hash::Hash + ::core::cmp::Eq,
            {
                const ID: $crate::partitioned::PartitionId =
                    $crate::partitioned::PartitionId::new($idx);

                type Value = $value;

                fn values(
                    stores: &<$schema as $crate::partitioned::PartitionSchema<V>>::Stores,
                ) -> &::std::collections::HashMap<V, $value> {
                    &stores.$idx
                }

                fn values_mut(
                    stores: &mut <$schema as $crate::partitioned::PartitionSchema<V>>::Stores,
                ) -> &mut ::std::collections::HashMap<V, $value> {
                    &mut stores.$idx
                }
            }
        )+
    };
    (
        $(#[$meta:meta])*
        $vis:vis struct $schema:ident { $($body:tt)+ }
    ) => {
        $crate::partition_schema!(@munch [$(#[$meta])*] [$vis] [$schema] [] [] $($body)+);
    };
}
