//! Randomized, guaranteed-solvable maze generation for the grid-search
//! visualization engine.

mod generator;

pub use generator::{MazeError, MazeGenerator};

// End-to-end properties: every maze this crate generates must be solvable by
// every search variant, and the shortest-path variants must agree.
#[cfg(test)]
mod search_properties {
    use crate::MazeGenerator;
    use pathviz_paths::{Algorithm, Search, Step};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn every_variant_solves_generated_mazes() {
        for seed in 0..20 {
            let mut generator = MazeGenerator::new(StdRng::seed_from_u64(seed));
            let grid = generator.generate(8, 8, 0.3).unwrap();

            for algorithm in Algorithm::ALL {
                let mut search =
                    Search::new(algorithm, &grid, grid.start(), grid.goal()).unwrap();
                let steps: Vec<Step> = search.by_ref().collect();

                assert!(
                    search.did_reach_goal(),
                    "{algorithm} failed on maze seed {seed}"
                );
                let progress = steps
                    .iter()
                    .filter(|s| matches!(s, Step::Explore(_) | Step::Frontier(_)))
                    .count();
                assert!(progress <= grid.len());
            }
        }
    }

    #[test]
    fn shortest_path_variants_agree_on_generated_mazes() {
        for seed in 0..20 {
            let mut generator = MazeGenerator::new(StdRng::seed_from_u64(seed));
            let grid = generator.generate(8, 8, 0.25).unwrap();

            let mut lengths = Vec::new();
            for algorithm in [Algorithm::BreadthFirst, Algorithm::Dijkstra, Algorithm::AStar] {
                let mut search =
                    Search::new(algorithm, &grid, grid.start(), grid.goal()).unwrap();
                search.by_ref().for_each(drop);
                lengths.push(search.path().unwrap().len());
            }
            assert_eq!(lengths[0], lengths[1], "Dijkstra not optimal on seed {seed}");
            assert_eq!(lengths[0], lengths[2], "A* not optimal on seed {seed}");

            let mut dfs =
                Search::new(Algorithm::DepthFirst, &grid, grid.start(), grid.goal()).unwrap();
            dfs.by_ref().for_each(drop);
            assert!(dfs.path().unwrap().len() >= lengths[0]);
        }
    }
}
