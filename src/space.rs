use std::fmt;

use itertools::izip;
use serde::de::Error as _;
use serde::de::SeqAccess;
use serde::de::Visitor;
use serde::ser::SerializeStruct;
use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;
use serde::Serializer;

#[derive(Debug, thiserror::Error)]
pub enum SpaceError {
    #[error("dimension {dim} out of range for rank {rank}")]
    DimOutOfRange { dim: usize, rank: usize },

    #[error("worker {worker} out of range for team of {team}")]
    WorkerOutOfRange { worker: usize, team: usize },

    #[error("empty worker team")]
    EmptyTeam,
}

/// A dense, axis-aligned box of integer multi-indices: for each of `N`
/// dimensions, an inclusive `start` and an exclusive `limit`.
///
/// Spaces are plain values. Strategies take copies, and operations such as
/// [`IndexSpace::partition`] produce new, independent spaces rather than
/// mutating in place.
///
/// Callers maintain `start[d] <= limit[d]` for every dimension; this is
/// not validated. A space with `start[d] == limit[d]` for some `d` is
/// empty and traverses in zero steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IndexSpace<const N: usize> {
    start: [usize; N],
    limit: [usize; N],
}

// `serde`'s derive macros only provide `Serialize`/`Deserialize` for
// fixed-size arrays up to a hardcoded length, not for arrays generic over a
// const parameter `N`. These impls do the same field-by-field work the
// derive would, using slices (which `serde` does support generically) to
// get there.
impl<const N: usize> Serialize for IndexSpace<N> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("IndexSpace", 2)?;
        state.serialize_field("start", self.start.as_slice())?;
        state.serialize_field("limit", self.limit.as_slice())?;
        state.end()
    }
}

impl<'de, const N: usize> Deserialize<'de> for IndexSpace<N> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct IndexSpaceVisitor<const N: usize>;

        impl<'de, const N: usize> Visitor<'de> for IndexSpaceVisitor<N> {
            type Value = IndexSpace<N>;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("struct IndexSpace")
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let start: Vec<usize> = seq
                    .next_element()?
                    .ok_or_else(|| A::Error::invalid_length(0, &self))?;
                let limit: Vec<usize> = seq
                    .next_element()?
                    .ok_or_else(|| A::Error::invalid_length(1, &self))?;
                let start: [usize; N] = start
                    .try_into()
                    .map_err(|_| A::Error::custom("wrong array length for `start`"))?;
                let limit: [usize; N] = limit
                    .try_into()
                    .map_err(|_| A::Error::custom("wrong array length for `limit`"))?;
                Ok(IndexSpace { start, limit })
            }
        }

        deserializer.deserialize_struct("IndexSpace", &["start", "limit"], IndexSpaceVisitor)
    }
}

impl<const N: usize> IndexSpace<N> {
    /// Creates a new space from per-dimension bounds, in declaration
    /// order. The bound counts are part of the type, so supplying the
    /// wrong number of bounds for `N` is a compile error, not a runtime
    /// failure:
    ///
    /// ```compile_fail
    /// let s = ndrange::IndexSpace::<2>::new([0, 0, 0], [1, 1, 1]);
    /// ```
    ///
    /// A zero-dimensional space is rejected when the constructor is
    /// instantiated:
    ///
    /// ```compile_fail
    /// let s = ndrange::IndexSpace::<0>::new([], []);
    /// ```
    ///
    /// Spaces can also be constructed with the [`space!`] macro, which
    /// takes one half-open range per dimension.
    pub fn new(start: [usize; N], limit: [usize; N]) -> Self {
        const { assert!(N > 0, "an index space needs at least one dimension") };
        Self { start, limit }
    }

    /// The inclusive lower bound of each dimension.
    pub fn start(&self) -> [usize; N] {
        self.start
    }

    /// The exclusive upper bound of each dimension.
    pub fn limit(&self) -> [usize; N] {
        self.limit
    }

    /// The number of dimensions.
    pub fn rank(&self) -> usize {
        N
    }

    /// The width of the given dimension.
    pub fn extent(&self, dim: usize) -> usize {
        self.limit[dim].saturating_sub(self.start[dim])
    }

    /// The number of multi-indices in the space.
    pub fn len(&self) -> usize {
        (0..N).map(|dim| self.extent(dim)).product()
    }

    /// Whether the space contains no multi-indices, i.e. some dimension
    /// has zero width.
    pub fn is_empty(&self) -> bool {
        (0..N).any(|dim| self.extent(dim) == 0)
    }

    /// Whether `index` lies within the space's bounds in every dimension.
    pub fn contains(&self, index: &[usize; N]) -> bool {
        izip!(&self.start, &self.limit, index).all(|(s, l, i)| s <= i && i < l)
    }
}

impl<const N: usize> fmt::Display for IndexSpace<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for dim in 0..N {
            write!(f, "{}..{}", self.start[dim], self.limit[dim])?;
            if dim < N - 1 {
                write!(f, ", ")?;
            }
        }
        write!(f, "]")
    }
}

/// Construct an [`IndexSpace`] from one half-open range per dimension, in
/// declaration order.
///
/// ```
/// let s = ndrange::space!(1..99, 1..99);
/// assert_eq!(s.start(), [1, 1]);
/// assert_eq!(s.limit(), [99, 99]);
/// assert_eq!(s.len(), 98 * 98);
/// ```
#[macro_export]
macro_rules! space {
    ( $( $bounds:expr ),* $(,)? ) => {
        {
            let ranges = [ $( $bounds ),* ];
            let start = ranges.clone().map(|r| r.start);
            let limit = ranges.map(|r| r.end);
            $crate::IndexSpace::new(start, limit)
        }
    };
}
