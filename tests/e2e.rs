mod common;

use common::synthetic_image::{border_ring, checkerboard, noise};
use pgm_processor::edges::{hysteresis_threshold, STRONG_EDGE};
use pgm_processor::image::io::{decode_pgm, encode_pgm, load_pgm, save_pgm};
use pgm_processor::image::ImageView;
use pgm_processor::{
    local_binary_pattern, mean_filter_3x3, median_filter_3x3, prewitt, resize, sobel, EdgeDetector,
    FilterKind, GrayImage, Operation, ProcessError, ScaleFactor, Session,
};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn flat_5x5_is_fixed_point_of_mean_filter_through_session() {
    init_logger();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("flat.pgm");
    save_pgm(&GrayImage::filled(5, 5, 100), &path).unwrap();

    let mut session = Session::new();
    session.load(&path).unwrap();
    session
        .apply(Operation::Filter {
            kind: FilterKind::Mean,
        })
        .unwrap();
    let out = session.image().unwrap();
    assert_eq!(out.dimensions(), (5, 5));
    assert!(out.data.iter().all(|&v| v == 100));
}

#[test]
fn shrinking_4x4_keeps_even_samples() {
    let data: Vec<u8> = (0..16).map(|i| i * 10).collect();
    let src = GrayImage::from_raw(4, 4, data).unwrap();
    let out = resize(&src, ScaleFactor::ShrinkHalf).unwrap();
    assert_eq!(out.dimensions(), (2, 2));
    assert_eq!(out.data, vec![0, 20, 80, 100]);
}

#[test]
fn zoom_then_shrink_restores_dimensions() {
    let src = noise(10, 6, 7);
    let zoomed = resize(&src, ScaleFactor::Zoom2).unwrap();
    assert_eq!(zoomed.dimensions(), (20, 12));
    let back = resize(&zoomed, ScaleFactor::ShrinkHalf).unwrap();
    assert_eq!(back, src);

    let zoomed = resize(&src, ScaleFactor::Zoom3).unwrap();
    for y in 0..zoomed.h {
        for x in 0..zoomed.w {
            assert_eq!(zoomed.get(x, y), src.get(x / 3, y / 3));
        }
    }
}

#[test]
fn smoothing_filters_preserve_border_ring() {
    let src = noise(17, 11, 99);
    assert_eq!(border_ring(&mean_filter_3x3(&src)), border_ring(&src));
    assert_eq!(border_ring(&median_filter_3x3(&src)), border_ring(&src));
}

#[test]
fn gradient_operators_have_zero_border() {
    let src = checkerboard(40, 30, 8);
    for out in [sobel(&src), prewitt(&src)] {
        assert!(border_ring(&out).iter().all(|&v| v == 0));
        // checkerboard contrast 188 saturates at cell boundaries
        assert_eq!(out.get(8, 4), 255);
        assert_eq!(out.get(4, 4), 0);
    }
}

#[test]
fn lbp_of_constant_image_is_all_ones_inside() {
    let out = local_binary_pattern(&GrayImage::filled(8, 8, 13));
    for y in 1..7 {
        for x in 1..7 {
            assert_eq!(out.get(x, y), 255);
        }
    }
    assert!(border_ring(&out).iter().all(|&v| v == 0));
}

#[test]
fn hysteresis_of_zero_image_is_zero() {
    let out = hysteresis_threshold(&GrayImage::new(16, 9)).unwrap();
    assert!(out.data.iter().all(|&v| v == 0));
}

#[test]
fn canny_outlines_checkerboard() {
    init_logger();
    let src = checkerboard(64, 64, 16);
    let edges = EdgeDetector::Canny.apply(&src).unwrap();
    assert!(edges.data.iter().all(|&v| v == 0 || v == STRONG_EDGE));
    // a cell boundary column well inside the frame carries edges
    let on_boundary = (20..28).filter(|&y| {
        (14..18).any(|x| edges.get(x, y) == STRONG_EDGE)
    });
    assert!(on_boundary.count() >= 6);
    // the centre of a cell stays quiet
    assert_eq!(edges.get(24, 24), 0);
}

#[test]
fn unsupported_selectors_leave_session_untouched() {
    let src = noise(9, 9, 3);
    let mut session = Session::with_image(src.clone());
    assert!(matches!(
        "1.5".parse::<ScaleFactor>(),
        Err(ProcessError::UnsupportedFactor(_))
    ));
    assert!(FilterKind::from_choice(0).is_err());
    assert!(EdgeDetector::from_choice(4).is_err());
    let err = session
        .apply(Operation::Resize {
            factor: ScaleFactor::ShrinkQuarter,
        })
        .unwrap_err();
    assert!(matches!(err, ProcessError::Dimension { factor: 4, .. }));
    assert_eq!(session.current(), Some(&src));
}

#[test]
fn operations_chain_and_save() {
    init_logger();
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("board.pgm");
    let output = dir.path().join("nested/out/edges.pgm");
    save_pgm(&checkerboard(32, 32, 8), &input).unwrap();

    let mut session = Session::new();
    session.load(&input).unwrap();
    for op in [
        Operation::Filter {
            kind: FilterKind::Median,
        },
        Operation::Resize {
            factor: ScaleFactor::Zoom2,
        },
        Operation::Edge {
            detector: EdgeDetector::Sobel,
        },
        Operation::Lbp,
    ] {
        session.apply(op).unwrap();
    }
    session.save(&output).unwrap();

    let saved = load_pgm(&output).unwrap();
    assert_eq!(saved.dimensions(), (64, 64));
    assert_eq!(&saved, session.image().unwrap());
}

#[test]
fn every_output_stays_within_its_max_value() {
    init_logger();
    let src = decode_pgm(b"P2\n5 5\n15\n1 2 3 4 5\n6 7 8 9 10\n11 12 13 14 15\n1 3 5 7 9\n2 4 6 8 10\n")
        .unwrap();
    assert_eq!(src.max_value, 15);

    let ops = [
        Operation::Resize {
            factor: ScaleFactor::Zoom2,
        },
        Operation::Filter {
            kind: FilterKind::Mean,
        },
        Operation::Filter {
            kind: FilterKind::Median,
        },
        Operation::Edge {
            detector: EdgeDetector::Sobel,
        },
        Operation::Edge {
            detector: EdgeDetector::Prewitt,
        },
        Operation::Edge {
            detector: EdgeDetector::Canny,
        },
        Operation::Lbp,
    ];
    for op in ops {
        let (out, _) = op.run(&src).unwrap();
        let peak = out.data.iter().copied().max().unwrap_or(0);
        assert!(
            u16::from(peak) <= out.max_value,
            "{op}: sample {peak} above max_value {}",
            out.max_value
        );
    }

    // range-preserving operations keep the source ceiling
    let zoomed = resize(&src, ScaleFactor::Zoom2).unwrap();
    assert_eq!(zoomed.max_value, 15);
    assert_eq!(median_filter_3x3(&src).max_value, 15);

    let codes = local_binary_pattern(&src);
    assert_eq!(codes.max_value, 255);
    assert!(encode_pgm(&codes).starts_with(b"P5\n5 5\n255\n"));
    assert_eq!(sobel(&src).max_value, 255);
}
