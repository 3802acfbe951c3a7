use twisted_curves::{
    curve::{Cubic, CURVE_SAMPLES, TWIST_DOMAIN},
    plot::{plotters::prelude::*, Plot},
    sample::sample,
};

fn main() {
    //
    // The plain S-curve, and the same curve with +x added to it
    let base: Cubic = Cubic::new(-1.0, 0.0, 0.0, 0.0);
    let twisted = base.twisted(1.0);

    println!("base:    f(x) = {}", base.equation());
    println!("twisted: f(x) = {}", twisted.equation());

    let base_points =
        sample(&base, TWIST_DOMAIN, CURVE_SAMPLES).expect("Failed to sample base curve");
    let twisted_points =
        sample(&twisted, TWIST_DOMAIN, CURVE_SAMPLES).expect("Failed to sample twisted curve");

    //
    // Shared y-range so both lines sit in one chart
    let (min_y, max_y) = base_points
        .ys()
        .iter()
        .chain(twisted_points.ys())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &y| {
            (lo.min(y), hi.max(y))
        });
    let pad = ((max_y - min_y) * 0.05).max(1.0);

    let path = twisted_curves::plot_filename!();
    let mut svg = String::new();
    {
        let backend = SVGBackend::with_string(&mut svg, (640, 480));
        let root = backend.into_drawing_area();
        root.fill(&WHITE).expect("Failed to fill drawing area");

        Plot::new(
            &root,
            "Visual Impact of Adding +x to f(x) = -x^3",
            *TWIST_DOMAIN.start()..*TWIST_DOMAIN.end(),
            (min_y - pad)..(max_y + pad),
        )
        .and_then(|plot| {
            plot.with_line(
                &base_points,
                &format!("f(x) = {}", base.equation()),
                3,
                &full_palette::ORANGE,
            )
        })
        .and_then(|plot| {
            plot.with_line(
                &twisted_points,
                &format!("f(x) = {}", twisted.equation()),
                3,
                &full_palette::PURPLE,
            )
        })
        .and_then(Plot::build)
        .expect("Failed to build plot");
    }
    std::fs::write(&path, svg).expect("Failed to write plot");
    println!("Wrote plot to {}", path.display());
}
