#[cfg(test)]
mod app_test {
    use crate::waste_scan::core::Phase;
    use crate::waste_scan::tests::fixture::Fixture;

    #[test]
    fn test_new_app_starts_waiting() {
        let f = Fixture::new();

        let model = f.waste_scan.model.lock().unwrap();

        assert_eq!(model.latest_request, 0);
        assert!(matches!(model.phase, Phase::WaitingForImage));
    }

    #[test]
    fn test_render_writes_result_to_display() {
        let f = Fixture::new();
        let (model, _) = crate::waste_scan::core::init();

        f.waste_scan.render(&model).unwrap();

        let lines = f.display_lines.lock().unwrap();
        assert_eq!(lines[0], "Waste Scan");
    }
}
