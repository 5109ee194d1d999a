//! Tests for run progress tracking

#[cfg(test)]
mod tests {
    use regionmap::io::configuration::MAX_INDIVIDUAL_PROGRESS_BARS;
    use regionmap::io::progress::ProgressManager;

    // Tests a single run lifecycle
    // Verified by panicking on unknown run indices
    #[test]
    fn test_single_run() {
        let mut pm = ProgressManager::new();
        pm.initialize(1);

        pm.start_run(0, "map.png", 5_000);
        pm.update_iteration(0, 1_000);
        pm.update_iteration(0, 1_001);
        pm.complete_run(0, 700);
        pm.finish();

        assert_eq!(pm.visible_runs(), 1);
    }

    // Tests default trait implementation
    // Verified by creating different initial states
    #[test]
    fn test_default() {
        let pm = ProgressManager::default();

        assert_eq!(pm.visible_runs(), 0);
        pm.update_iteration(3, 1_000);
        pm.complete_run(3, 0);
        pm.finish();
    }

    // Tests only the most recent runs keep a bar
    // Verified by never removing old bars
    #[test]
    fn test_rolling_window() {
        let mut pm = ProgressManager::new();
        let runs = MAX_INDIVIDUAL_PROGRESS_BARS + 3;
        pm.initialize(runs);

        for index in 0..runs {
            pm.start_run(index, &format!("map_{index}.png"), 10);
            pm.complete_run(index, 10);
        }
        pm.finish();

        assert_eq!(pm.visible_runs(), MAX_INDIVIDUAL_PROGRESS_BARS);
    }
}
