//! Tests for renderer progress reporting

#[cfg(test)]
mod tests {
    use floopify::io::progress::ProgressManager;
    use floopify::render::RenderObserver;

    // Tests stages run through their lifecycle and are recorded in order
    // Verified by not recording finished stages
    #[test]
    fn test_stage_lifecycle() {
        let mut pm = ProgressManager::new();

        pm.start_stage("quantize");
        pm.begin(4);
        for _ in 0..4 {
            pm.tile_done();
        }
        pm.finish_stage("quantize");

        pm.start_stage("pixelify");
        pm.begin(2);
        pm.tile_done();
        pm.finish();

        assert_eq!(pm.finished_stages(), ["quantize".to_string()]);
    }

    // Tests observer calls without an open stage are ignored
    // Verified by panicking when no bar is open
    #[test]
    fn test_observer_without_stage() {
        let mut pm = ProgressManager::default();
        pm.begin(10);
        pm.tile_done();
        pm.finish();
        assert!(pm.finished_stages().is_empty());
    }
}
