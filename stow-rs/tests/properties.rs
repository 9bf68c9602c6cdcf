#[cfg(test)]
mod tests {
    use std::fs::File;
    use std::io::BufReader;
    use std::path::Path;
    use std::sync::Arc;

    use float_cmp::approx_eq;
    use rand::prelude::SmallRng;
    use rand::{Rng, SeedableRng};
    use test_case::test_case;

    use stow_rs::entities::{Container, Instance, ItemType, Solution};
    use stow_rs::eval::{Encoding, Evaluator};
    use stow_rs::geometry::Shape;
    use stow_rs::io::ext_repr::ExtInstance;
    use stow_rs::io::import::Importer;
    use stow_rs::sim::{catalog_sequence, priority_sequence};
    use stow_rs::strategy::Strategy;
    use stow_rs::util::{EvalConfig, assertions};

    const SEQUENCE_LEN: usize = 120;

    fn read_instance(path: &str) -> Instance {
        let file = File::open(Path::new(path)).unwrap();
        let ext: ExtInstance = serde_json::from_reader(BufReader::new(file)).unwrap();
        Importer::new().import_instance(&ext).unwrap()
    }

    fn evaluator(instance: Instance) -> Evaluator {
        Evaluator::new(Arc::new(instance), EvalConfig::default()).unwrap()
    }

    fn small_3d() -> Instance {
        let container = Container::new_3d(30.0, 20.0, 30.0).unwrap();
        let boxes = [
            ("cube", 5.0, 5.0, 5.0, 40),
            ("slab", 12.0, 3.0, 8.0, 20),
            ("odd", 4.5, 6.2, 3.1, 30),
            ("beam", 31.0, 1.0, 1.0, 5),
        ];
        let items = boxes
            .iter()
            .enumerate()
            .map(|(id, &(name, width, height, depth, qty))| {
                let shape = Shape::Box {
                    width,
                    height,
                    depth,
                };
                ItemType::new(id, name, shape, qty, width).unwrap()
            })
            .collect();
        Instance::new(container, items).unwrap()
    }

    fn small_2d() -> Instance {
        let container = Container::new_2d(40.0, 30.0).unwrap();
        let items = vec![
            ItemType::new(0, "rect", Shape::Rectangle { width: 6.0, height: 4.0 }, 30, 6.0).unwrap(),
            ItemType::new(1, "square", Shape::Square { side: 5.5 }, 20, 5.0).unwrap(),
            ItemType::new(2, "disc", Shape::Circle { radius: 3.0 }, 20, 4.0).unwrap(),
            ItemType::new(3, "wedge", Shape::Triangle { base: 7.0, height: 5.0 }, 20, 3.0).unwrap(),
            ItemType::new(4, "huge", Shape::Circle { radius: 25.0 }, 2, 100.0).unwrap(),
        ];
        Instance::new(container, items).unwrap()
    }

    /// Random sequence, including ids that do not exist in the catalog
    fn random_sequence(n_items: usize, rng: &mut impl Rng) -> Vec<usize> {
        (0..SEQUENCE_LEN)
            .map(|_| rng.random_range(0..=n_items))
            .collect()
    }

    fn check_properties(evaluator: &Evaluator, solution: &Solution) {
        let instance = evaluator.instance();
        assert!(assertions::solution_is_feasible(instance, solution));

        let m = solution.metrics();
        assert!(m.used <= m.occupied + 1e-9);
        assert!(m.occupied <= m.capacity + 1e-9);
        assert!(m.shape_wastage >= -1e-9);
        assert!(approx_eq!(f64, solution.total_wastage(), m.capacity - m.used, epsilon = 1e-9));
    }

    #[test_case(Strategy::Hinted)]
    #[test_case(Strategy::BottomUp)]
    #[test_case(Strategy::Layered { band: 0 })]
    #[test_case(Strategy::Layered { band: 2 })]
    #[test_case(Strategy::FrontToBack)]
    #[test_case(Strategy::Mixed { band: 0 })]
    #[test_case(Strategy::Mixed { band: 1 })]
    fn layouts_3d(strategy: Strategy) {
        let evaluator = evaluator(small_3d());
        let mut rng = SmallRng::seed_from_u64(0);
        for _ in 0..5 {
            let sequence = random_sequence(evaluator.instance().items.len(), &mut rng);
            let encoding = Encoding::new(sequence, strategy);
            let solution = evaluator.evaluate(&encoding).unwrap();
            check_properties(&evaluator, &solution);

            //the beam is wider than the container
            assert!(solution.placements().iter().all(|p| p.item_id != 3));
            assert_eq!(solution, evaluator.evaluate(&encoding).unwrap());
        }
    }

    #[test_case(Strategy::BottomLeft)]
    #[test_case(Strategy::TopLeft)]
    #[test_case(Strategy::BestFit)]
    #[test_case(Strategy::FirstFit)]
    fn layouts_2d(strategy: Strategy) {
        let evaluator = evaluator(small_2d());
        let mut rng = SmallRng::seed_from_u64(1);
        for _ in 0..5 {
            let sequence = random_sequence(evaluator.instance().items.len(), &mut rng);
            let encoding = Encoding::new(sequence, strategy);
            let solution = evaluator.evaluate(&encoding).unwrap();
            check_properties(&evaluator, &solution);

            //the huge disc does not fit
            assert!(solution.placements().iter().all(|p| p.item_id != 4));
            assert!(solution.placements().iter().all(|p| p.anchor.z == 0));
            assert_eq!(solution, evaluator.evaluate(&encoding).unwrap());
        }
    }

    #[test]
    fn circle_shape_wastage() {
        let container = Container::new_2d(20.0, 20.0).unwrap();
        let items = vec![ItemType::new(0, "disc", Shape::Circle { radius: 5.0 }, 1, 0.0).unwrap()];
        let evaluator = evaluator(Instance::new(container, items).unwrap());

        let solution = evaluator
            .evaluate(&Encoding::new(vec![0], Strategy::BottomLeft))
            .unwrap();
        assert_eq!(solution.n_placed(), 1);
        assert!(approx_eq!(f64, solution.metrics().shape_wastage, 21.46, epsilon = 0.01));
    }

    #[test]
    fn fifty_cubes() {
        let evaluator = evaluator(read_instance("../assets/warehouse_3d.json"));
        let solution = evaluator
            .evaluate(&Encoding::new(vec![0; 50], Strategy::BottomUp))
            .unwrap();
        assert_eq!(solution.n_placed(), 50);
        assert!(approx_eq!(f64, solution.metrics().used, 50_000.0));
        check_properties(&evaluator, &solution);
    }

    #[test_case(Strategy::Hinted; "hinted")]
    #[test_case(Strategy::FrontToBack; "front to back")]
    fn empty_encoding(strategy: Strategy) {
        let evaluator = evaluator(read_instance("../assets/warehouse_3d.json"));
        let solution = evaluator.evaluate(&Encoding::new(vec![], strategy)).unwrap();
        assert_eq!(solution.n_placed(), 0);
        assert!(approx_eq!(f64, solution.total_wastage(), 800_000.0));
        assert_eq!(solution.total_cost(), 0.0);
        assert_eq!(solution.fitness(), 0.0);
    }

    #[test]
    fn warehouse_catalog_order() {
        let evaluator = evaluator(read_instance("../assets/warehouse_3d.json"));
        let cap = evaluator.config().instance_cap;
        let sequence = catalog_sequence(evaluator.instance(), cap);
        assert_eq!(sequence.len(), 200);

        let solution = evaluator
            .evaluate(&Encoding::new(sequence, Strategy::Hinted))
            .unwrap();
        check_properties(&evaluator, &solution);
        assert!(solution.fitness() > 0.0);
    }

    #[test]
    fn shapes_by_priority() {
        let evaluator = evaluator(read_instance("../assets/shapes_2d.json"));
        let sequence = priority_sequence(evaluator.instance(), &[10, 80, 40, 0], 20);
        assert_eq!(sequence.len(), 80);
        assert_eq!(sequence[0], 1);

        let solution = evaluator
            .evaluate(&Encoding::new(sequence, Strategy::BottomLeft))
            .unwrap();
        check_properties(&evaluator, &solution);
        assert_eq!(solution.n_placed(), 80);
        assert_eq!(solution.placed_qtys(evaluator.instance()), vec![20, 20, 20, 20]);
    }
}
