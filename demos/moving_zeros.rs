use twisted_curves::{
    curve::Curve,
    error::Error,
    roots::{RootSet, DEFAULT_ZEROS},
};

fn main() -> Result<(), Error> {
    //
    // Start from the default zeros. In the interactive page these come
    // from four sliders; here we just take the defaults.
    let zeros = RootSet::new(DEFAULT_ZEROS)?;

    //
    // Four zeros display in factored form - one (x - root) per zero
    println!("f(x) = {}", zeros.equation());
    for marker in zeros.markers() {
        println!("  zero at {}", marker.label);
    }

    //
    // Drop one zero and the display switches to expanded form
    let three = RootSet::new(&DEFAULT_ZEROS[..3])?;
    println!("With three zeros: f(x) = {}", three.equation());

    //
    // Plot the quartic with its zero markers, over the same domain and
    // sample density the page uses
    let curve = Curve::Zeros(zeros);
    twisted_curves::plot!(curve, title = "Graph of f(x) = Product of (x - root)");

    Ok(())
}
