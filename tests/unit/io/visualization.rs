//! Tests for smoothing frame capture and GIF export

#[cfg(test)]
mod tests {
    use regionmap::io::visualization::VisualizationCapture;
    use regionmap::{Color, RegionMap};

    fn map() -> RegionMap {
        let Ok(mut map) = RegionMap::new(4, 4) else {
            unreachable!("4x4 map is valid");
        };
        assert!(map.set(1, 1, Color::GREEN).is_ok());
        map
    }

    // Tests the capture interval spreads frames over the run
    // Verified by flooring the interval division
    #[test]
    fn test_interval() {
        assert_eq!(VisualizationCapture::new(1000, 100).interval(), 10);
        assert_eq!(VisualizationCapture::new(1001, 100).interval(), 11);
        assert_eq!(VisualizationCapture::new(5, 100).interval(), 1);
        assert_eq!(VisualizationCapture::new(0, 0).interval(), 1);
    }

    // Tests observe follows the schedule and always keeps the final iteration
    // Verified by skipping the final-iteration rule
    #[test]
    fn test_observe_schedule() {
        let mut capture = VisualizationCapture::new(25, 2);
        let map = map();

        for iteration in 1..=25 {
            capture.observe(iteration, &map);
        }

        let iterations: Vec<usize> = capture.frames().iter().map(|f| f.iteration).collect();
        assert_eq!(iterations, vec![13, 25]);
    }

    // Tests GIF export writes a decodable file
    // Verified by disabling the encoder
    #[test]
    fn test_export_gif() {
        let Ok(dir) = tempfile::tempdir() else {
            unreachable!("temporary directory should be available");
        };
        let path = dir.path().join("smoothing.gif");

        let mut capture = VisualizationCapture::new(2, 2);
        capture.record(0, &map());
        capture.observe(1, &map());
        capture.observe(2, &map());
        assert_eq!(capture.frame_count(), 3);

        assert!(capture.export_gif(&path, 50).is_ok());
        assert!(path.exists());
        assert!(image::open(&path).is_ok());
    }

    // Tests exporting without frames fails
    // Verified by writing an empty file instead
    #[test]
    fn test_export_without_frames() {
        let Ok(dir) = tempfile::tempdir() else {
            unreachable!("temporary directory should be available");
        };
        let capture = VisualizationCapture::new(10, 5);

        assert!(capture.export_gif(&dir.path().join("empty.gif"), 50).is_err());
    }
}
