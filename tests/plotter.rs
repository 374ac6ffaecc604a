use fnplot::data::expr::EvalError;
use fnplot::plotter::{Domain, ExpressionPlotter, FigureStyle, Series, MAX_SAMPLES};

fn exprs(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

#[test]
fn default_domain_is_half_open() {
    let d = Domain::default();
    let xs = d.samples();
    assert_eq!(xs.len(), 4000);
    assert_eq!(xs[0], -20.0);
    assert!(xs[xs.len() - 1] < 20.0);
    assert!((xs[xs.len() - 1] - 19.99).abs() < 1e-9);
}

#[test]
fn invalid_domains_are_rejected() {
    assert!(Domain::new(0.0, 1.0, 0.0).validate().is_err());
    assert!(Domain::new(1.0, 1.0, 0.1).validate().is_err());
    assert!(Domain::new(f64::NAN, 1.0, 0.1).validate().is_err());
    assert!(Domain::new(0.0, 1.0, -0.1).is_empty());
}

#[test]
fn oversized_domain_is_invalid_and_empty() {
    let huge = Domain::new(0.0, 1e300, 1e-300);
    assert!(huge.validate().is_err());
    assert_eq!(huge.len(), 0);
    assert!(huge.samples().is_empty());

    assert!(Domain::new(0.0, 1.0, 1e-9).validate().is_err());
    assert_eq!(Domain::new(0.0, MAX_SAMPLES as f64, 1.0).len(), MAX_SAMPLES);
}

#[test]
fn sin_and_constant_give_two_full_series() {
    let plotter = ExpressionPlotter::default();
    let fig = plotter.plot(&exprs(&["sin(x)", "2"])).unwrap();
    assert_eq!(fig.series.len(), 2);
    let sin = &fig.series[0];
    assert_eq!(sin.points.len(), 4000);
    for p in sin.points.iter().step_by(397) {
        assert!((p[1] - p[0].sin()).abs() < 1e-12);
    }
    assert!(fig.series[1].points.iter().all(|p| p[1] == 2.0));
}

#[test]
fn style_is_carried_into_the_figure() {
    let plotter = ExpressionPlotter::new(Domain::new(0.0, 1.0, 0.5), FigureStyle::default());
    let style = FigureStyle {
        title: "T".into(),
        x_label: "time".into(),
        y_label: "value".into(),
        show_legend: false,
        line_width: 2.0,
    };
    let fig = plotter.plot_styled(&exprs(&["x"]), &style).unwrap();
    assert_eq!(fig.style, style);
    assert_eq!(fig.series[0].points, vec![[0.0, 0.0], [0.5, 0.5]]);
}

#[test]
fn first_bad_expression_fails_the_whole_plot() {
    let plotter = ExpressionPlotter::default();
    let err = plotter.plot(&exprs(&["x", "y + 1", "2 +"])).unwrap_err();
    assert_eq!(err.expression, "y + 1");
    assert_eq!(err.source, EvalError::UnknownIdentifier("y".into()));
    assert!(err.to_string().contains("y + 1"));
}

#[test]
fn empty_input_gives_empty_figure() {
    let fig = ExpressionPlotter::default().plot(&[]).unwrap();
    assert!(fig.series.is_empty());
}

#[test]
fn non_finite_samples_split_segments() {
    let s = Series {
        label: "1/x".into(),
        points: vec![
            [-1.0, -1.0],
            [0.0, f64::INFINITY],
            [1.0, 1.0],
            [2.0, 0.5],
            [3.0, f64::NAN],
        ],
    };
    let segs = s.segments();
    assert_eq!(segs.len(), 2);
    assert_eq!(segs[0].len(), 1);
    assert_eq!(segs[1], &[[1.0, 1.0], [2.0, 0.5]]);
}
