//! Static partitioning of one dimension of an [`IndexSpace`] across a
//! fixed team of workers.

use crate::IndexSpace;
use crate::SpaceError;

impl<const N: usize> IndexSpace<N> {
    /// The contiguous slice of this space along `dim` owned by `worker`
    /// within a team of `team` workers. All other dimensions are
    /// unchanged, and the original space is not modified.
    ///
    /// The dimension's width is divided evenly; the last worker keeps the
    /// original limit and so absorbs the remainder of the division. The
    /// slices of all workers are pairwise disjoint and together cover the
    /// original range exactly, which is what makes per-partition writers
    /// safe to run concurrently. A pure function of its inputs: the same
    /// `(space, dim, worker, team)` always produces the same slice.
    ///
    /// With more workers than elements along `dim`, leading workers
    /// receive empty slices, which traverse in zero steps.
    ///
    /// ```
    /// let space = ndrange::space!(1..99, 1..99);
    /// assert_eq!(space.partition(0, 0, 4).unwrap(), ndrange::space!(1..25, 1..99));
    /// assert_eq!(space.partition(0, 3, 4).unwrap(), ndrange::space!(73..99, 1..99));
    /// ```
    pub fn partition(
        &self,
        dim: usize,
        worker: usize,
        team: usize,
    ) -> Result<IndexSpace<N>, SpaceError> {
        if dim >= N {
            return Err(SpaceError::DimOutOfRange { dim, rank: N });
        }
        if team == 0 {
            return Err(SpaceError::EmptyTeam);
        }
        if worker >= team {
            return Err(SpaceError::WorkerOutOfRange { worker, team });
        }

        let chunk = self.extent(dim) / team;
        let mut start = self.start();
        let mut limit = self.limit();
        start[dim] += worker * chunk;
        if worker != team - 1 {
            limit[dim] = start[dim] + chunk;
        }

        let owned = IndexSpace::new(start, limit);
        tracing::debug!(
            "partitioned {} along dim {}: worker {}/{} owns {}",
            self,
            dim,
            worker,
            team,
            owned
        );
        Ok(owned)
    }
}

#[cfg(test)]
mod tests {
    use rand::Rng;

    use crate::IndexSpace;
    use crate::SpaceError;
    use crate::space;

    // The per-worker slices along `dim` must tile the original range:
    // consecutive, gapless, and bounded by the original start and limit.
    fn assert_tiles<const N: usize>(space: IndexSpace<N>, dim: usize, team: usize) {
        let slices: Vec<_> = (0..team)
            .map(|worker| space.partition(dim, worker, team).unwrap())
            .collect();

        assert_eq!(slices[0].start(), space.start());
        assert_eq!(slices[team - 1].limit(), space.limit());
        for pair in slices.windows(2) {
            assert_eq!(pair[0].limit()[dim], pair[1].start()[dim]);
        }
        assert_eq!(
            slices.iter().map(|s| s.extent(dim)).sum::<usize>(),
            space.extent(dim)
        );

        // Untouched dimensions keep their original bounds.
        for slice in &slices {
            for d in (0..N).filter(|&d| d != dim) {
                assert_eq!(slice.start()[d], space.start()[d]);
                assert_eq!(slice.limit()[d], space.limit()[d]);
            }
        }
    }

    #[test]
    fn test_even_split() {
        let space = space!(0..8, 0..5);
        assert_eq!(space.partition(0, 0, 4).unwrap(), space!(0..2, 0..5));
        assert_eq!(space.partition(0, 1, 4).unwrap(), space!(2..4, 0..5));
        assert_eq!(space.partition(0, 2, 4).unwrap(), space!(4..6, 0..5));
        assert_eq!(space.partition(0, 3, 4).unwrap(), space!(6..8, 0..5));
        assert_tiles(space, 0, 4);
    }

    #[test]
    fn test_remainder_goes_to_last_worker() {
        let space = space!(0..10);
        assert_eq!(space.partition(0, 0, 4).unwrap(), space!(0..2));
        assert_eq!(space.partition(0, 1, 4).unwrap(), space!(2..4));
        assert_eq!(space.partition(0, 2, 4).unwrap(), space!(4..6));
        assert_eq!(space.partition(0, 3, 4).unwrap(), space!(6..10));
        assert_tiles(space, 0, 4);
    }

    #[test]
    fn test_nonzero_start() {
        let space = space!(1..99, 1..99);
        assert_tiles(space, 0, 4);
        assert_eq!(space.partition(0, 0, 4).unwrap(), space!(1..25, 1..99));
        assert_eq!(space.partition(0, 3, 4).unwrap(), space!(73..99, 1..99));
    }

    #[test]
    fn test_partition_other_dimension() {
        let space = space!(1..99, 1..99);
        assert_tiles(space, 1, 3);
        assert_eq!(space.partition(1, 0, 3).unwrap(), space!(1..99, 1..33));
    }

    #[test]
    fn test_single_worker() {
        let space = space!(3..9, 1..4);
        assert_eq!(space.partition(0, 0, 1).unwrap(), space);
    }

    #[test]
    fn test_more_workers_than_elements() {
        // chunk = 0: all but the last worker get empty slices, and the
        // last worker picks up the whole range.
        let space = space!(5..8);
        for worker in 0..4 {
            assert!(space.partition(0, worker, 5).unwrap().is_empty());
        }
        assert_eq!(space.partition(0, 4, 5).unwrap(), space);
        assert_tiles(space, 0, 5);
    }

    #[test]
    fn test_determinism() {
        let space = space!(1..99, 1..99);
        assert_eq!(
            space.partition(0, 2, 4).unwrap(),
            space.partition(0, 2, 4).unwrap()
        );
    }

    #[test]
    fn test_original_space_unchanged() {
        let space = space!(1..99, 1..99);
        let _ = space.partition(0, 0, 4).unwrap();
        assert_eq!(space, space!(1..99, 1..99));
    }

    #[test]
    fn test_errors() {
        let space = space!(0..10, 0..10);
        assert!(matches!(
            space.partition(2, 0, 4),
            Err(SpaceError::DimOutOfRange { dim: 2, rank: 2 })
        ));
        assert!(matches!(
            space.partition(0, 4, 4),
            Err(SpaceError::WorkerOutOfRange { worker: 4, team: 4 })
        ));
        assert!(matches!(
            space.partition(0, 0, 0),
            Err(SpaceError::EmptyTeam)
        ));
    }

    #[test]
    fn test_random_spaces_tile() {
        let mut rng = rand::thread_rng();
        for _ in 0..200 {
            let start = [rng.gen_range(0..50), rng.gen_range(0..50)];
            let limit = [
                start[0] + rng.gen_range(0..100),
                start[1] + rng.gen_range(0..100),
            ];
            let space = IndexSpace::new(start, limit);
            let dim = rng.gen_range(0..2);
            let team = rng.gen_range(1..=12);
            assert_tiles(space, dim, team);
        }
    }
}
