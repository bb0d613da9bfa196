#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use anyhow::Result;
    use figura::geometry::geo_traits::Shape;
    use figura::report::ReportConfig;
    use figura_cli::config::FiguraConfig;
    use figura_cli::prompt;
    use float_cmp::approx_eq;
    use test_case::test_case;

    fn init_logger() {
        let _ = env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Debug)
            .is_test(true)
            .try_init();
    }

    #[test]
    fn scales_about_origin() -> Result<()> {
        init_logger();
        let mut shapes = prompt::demo_shapes()?;
        let mut out: Vec<u8> = vec![];

        prompt::run(Cursor::new("0 0\n2\n"), &mut out, &mut shapes, ReportConfig::default())?;

        let expected = "\
Before scaling:
Rectangle: area = 50.0, center = (5.0, 5.0), width = 10.0, height = 5.0
Diamond: area = 50.0, center = (20.0, 5.0), width = 10.0, height = 10.0
Triangle: area = 25.0, center = (5.0, 5.0), width = 10.0, height = 10.0
Total area: 125.0
Bounding box: center = (12.5, 5.0), width = 25.0, height = 10.0
After scaling:
Rectangle: area = 200.0, center = (10.0, 10.0), width = 20.0, height = 10.0
Diamond: area = 200.0, center = (40.0, 10.0), width = 20.0, height = 20.0
Triangle: area = 100.0, center = (10.0, 10.0), width = 20.0, height = 20.0
Total area: 500.0
Bounding box: center = (25.0, 10.0), width = 50.0, height = 20.0
";
        assert_eq!(String::from_utf8(out)?, expected);
        Ok(())
    }

    #[test_case("3 4 -1"; "negative factor")]
    #[test_case("3 four 2"; "malformed coordinate")]
    #[test_case("3 4"; "missing factor")]
    #[test_case("0 0 1e308"; "overflowing factor")]
    #[test_case("-1e308 1e308 1e10"; "overflowing pivot distance")]
    fn invalid_input_changes_nothing(input: &str) {
        init_logger();
        let mut shapes = prompt::demo_shapes().unwrap();
        let areas_before = shapes.iter().map(|s| s.area()).collect::<Vec<_>>();
        let mut out: Vec<u8> = vec![];

        let result = prompt::run(Cursor::new(input), &mut out, &mut shapes, ReportConfig::default());

        assert!(result.is_err());
        assert!(out.is_empty());
        assert_eq!(shapes, prompt::demo_shapes().unwrap());
        let areas_after = shapes.iter().map(|s| s.area()).collect::<Vec<_>>();
        assert_eq!(areas_before, areas_after);
    }

    #[test]
    fn pivot_inside_collection_keeps_total_area_ratio() -> Result<()> {
        let mut shapes = prompt::demo_shapes()?;
        let mut out: Vec<u8> = vec![];
        prompt::run(Cursor::new("12.5 5 0.5"), &mut out, &mut shapes, ReportConfig::default())?;

        assert!(approx_eq!(f64, shapes.total_area(), 125.0 * 0.25, epsilon = 1e-9));
        let bbox = shapes.bbox().unwrap();
        assert!(approx_eq!(f64, bbox.centroid().0, 12.5, epsilon = 1e-9));
        assert!(approx_eq!(f64, bbox.centroid().1, 5.0, epsilon = 1e-9));
        assert!(approx_eq!(f64, bbox.width(), 12.5, epsilon = 1e-9));
        Ok(())
    }

    #[test]
    fn partial_config_file_falls_back_to_defaults() -> Result<()> {
        let config: FiguraConfig = serde_json::from_str(r#"{"report": {"precision": 2}}"#)?;
        assert_eq!(config.report.precision, 2);
        assert_eq!(config.words, FiguraConfig::default().words);

        let config: FiguraConfig = serde_json::from_str(r#"{"words": {"old_char": "x"}}"#)?;
        assert_eq!(config.words.old_char, 'x');
        assert_eq!(config.words.new_char, 'b');
        assert_eq!(config.report, ReportConfig::default());
        Ok(())
    }
}
