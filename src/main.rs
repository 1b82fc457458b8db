use rotly::linalg::blas::rot::drot;
use rotly::linalg::blas::rotg::drotg;
use rotly::linalg::blas::rotm::drotm;
use rotly::linalg::blas::rotmg::drotmg;
use rotly::linalg::blas::{DrotmParams, RotmFlag};

fn print_vector(v: &[f64], name: &str) {
    print!("{name} = [");
    for (i, val) in v.iter().enumerate() {
        print!("{val:.6}");
        if i < v.len() - 1 {
            print!(", ");
        }
    }
    println!("]");
}

fn print_params(params: &DrotmParams) {
    let flag = match params.flag {
        RotmFlag::Identity => "Identity",
        RotmFlag::Rescaling => "Rescaling",
        RotmFlag::OffDiagonal => "OffDiagonal",
        RotmFlag::Diagonal => "Diagonal",
    };
    let (h11, h12, h21, h22) = params.explicit();
    println!("  flag = {flag}");
    println!("  H = [[{h11:.6}, {h12:.6}], [{h21:.6}, {h22:.6}]]");
}

fn run_modified_case(d1: f64, d2: f64, x1: f64, y1: f64, test_name: &str) {
    println!("\n--- Modified rotation: {test_name} ---");
    println!("inputs: d1={d1}, d2={d2}, x1={x1}, y1={y1}");

    let (mut rd1, mut rd2, mut rx1) = (d1, d2, x1);
    let params = drotmg(&mut rd1, &mut rd2, &mut rx1, y1);
    print_params(&params);
    println!("outputs: d1'={rd1:.6e}, d2'={rd2:.6e}, x1'={rx1:.6}");

    let mut x = vec![x1];
    let mut y = vec![y1];
    drotm(1, &mut x, 1, &mut y, 1, params);
    print_vector(&x, "x after apply");
    print_vector(&y, "y after apply");

    let residual = y[0] * rd2.abs().sqrt();
    if residual.abs() < 1e-10 {
        println!("OK: second component zeroed (residual {residual:.2e})");
    } else {
        println!("FAILURE: residual {residual:.6e} is not zero");
    }
}

fn run_plane_case(a: f64, b: f64, test_name: &str) {
    println!("\n--- Plane rotation: {test_name} ---");
    println!("inputs: a={a}, b={b}");

    let (mut r, mut z, mut c, mut s) = (a, b, 0.0, 0.0);
    drotg(&mut r, &mut z, &mut c, &mut s);
    println!("c={c:.6}, s={s:.6}, r={r:.6}, z={z:.6}");

    let mut x = vec![a];
    let mut y = vec![b];
    drot(1, &mut x, 1, &mut y, 1, c, s);
    print_vector(&x, "x after apply");
    print_vector(&y, "y after apply");

    if y[0].abs() < 1e-10 && (x[0] - r).abs() < 1e-10 {
        println!("OK: rotated onto ({r:.6}, 0)");
    } else {
        println!("FAILURE: expected ({r:.6}, 0), got ({}, {})", x[0], y[0]);
    }
}

fn main() {
    println!("rotly rotation kernel demo");

    run_plane_case(3.0, 4.0, "Pythagorean pair");
    run_plane_case(0.0, 5.0, "zero leading component");

    run_modified_case(0.1, 0.3, 1.2, 0.2, "regular off-diagonal shape");
    run_modified_case(1.0, 1.0, 1.0, 1.0, "equal weights (diagonal shape)");
    run_modified_case(4.0, 0.0, 8.0, -5.0, "already-zero second component");
    run_modified_case(-4.0, 6.0, 8.0, -4.0, "negative d1 (degenerate)");
    run_modified_case(
        1_600_000_000.0,
        800_000_000.0,
        8.0,
        7.0,
        "extreme exponents (rescaled)",
    );

    println!("\nDemo finished.");
}
