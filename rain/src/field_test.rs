use super::*;
use crate::consts::GLYPH_SIZE;
use rand::SeedableRng;
use rand::rngs::SmallRng;

// =============================================================
// Helpers
// =============================================================

fn rng() -> SmallRng {
    SmallRng::seed_from_u64(0xC0FFEE)
}

fn field(width: f64, height: f64) -> RainField {
    RainField::new(width, height, GLYPH_SIZE, &mut rng())
}

// =============================================================
// column_count
// =============================================================

#[test]
fn column_count_floors_width_over_glyph() {
    assert_eq!(column_count(1920.0, 18.0), 106);
    assert_eq!(column_count(18.0, 18.0), 1);
    assert_eq!(column_count(17.9, 18.0), 0);
}

#[test]
fn column_count_degenerate_inputs_are_zero() {
    assert_eq!(column_count(0.0, 18.0), 0);
    assert_eq!(column_count(-50.0, 18.0), 0);
    assert_eq!(column_count(f64::NAN, 18.0), 0);
    assert_eq!(column_count(100.0, 0.0), 0);
}

// =============================================================
// Seeding
// =============================================================

#[test]
fn new_field_seeds_one_column_per_slot() {
    let f = field(800.0, 600.0);
    assert_eq!(f.column_count(), 44);
    assert_eq!(f.width(), 800.0);
    assert_eq!(f.height(), 600.0);
}

#[test]
fn seeded_columns_start_above_canvas_with_valid_speed() {
    let f = field(1000.0, 600.0);
    for col in f.columns() {
        assert!(col.position <= 0.0 && col.position >= f64::from(INITIAL_OFFSET_MIN));
        assert_eq!(col.position.fract(), 0.0);
        assert!(col.speed >= SPEED_MIN && col.speed < SPEED_MAX);
    }
}

#[test]
fn head_y_scales_by_glyph_size() {
    let col = Column { position: 3.5, speed: 0.5 };
    assert_eq!(col.head_y(18.0), 63.0);
}

// =============================================================
// step
// =============================================================

#[test]
fn step_advances_each_column_by_its_speed() {
    let mut f = field(360.0, 10_000.0);
    let before = f.columns().to_vec();
    f.step(&mut rng());
    for (old, new) in before.iter().zip(f.columns()) {
        assert!((new.position - (old.position + old.speed)).abs() < 1e-12);
        assert_eq!(new.speed, old.speed);
    }
}

#[test]
fn step_resets_columns_far_below_canvas() {
    let mut f = field(180.0, 100.0);
    // Far beyond height + maximum slack: must reset on the next step.
    let beyond = (100.0 + RESET_SLACK_PX) / GLYPH_SIZE + 10.0;
    f.columns = vec![Column { position: beyond, speed: 0.5 }; f.column_count()];
    f.step(&mut rng());
    for col in f.columns() {
        assert!(col.position <= 0.0 && col.position >= f64::from(RESET_OFFSET_MIN));
        assert!(col.speed >= SPEED_MIN && col.speed < SPEED_MAX);
    }
}

#[test]
fn step_keeps_columns_within_canvas() {
    let mut f = field(180.0, 10_000.0);
    f.columns = vec![Column { position: 10.0, speed: 1.0 }; f.column_count()];
    f.step(&mut rng());
    assert!(f.columns().iter().all(|c| (c.position - 11.0).abs() < 1e-12));
}

#[test]
fn many_steps_keep_positions_bounded() {
    let mut f = field(540.0, 300.0);
    let mut r = rng();
    let limit = (300.0 + RESET_SLACK_PX) / GLYPH_SIZE + SPEED_MAX;
    for _ in 0..5_000 {
        f.step(&mut r);
        for col in f.columns() {
            assert!(col.position <= limit, "position {} exceeded {limit}", col.position);
            assert!(col.position >= f64::from(INITIAL_OFFSET_MIN));
        }
    }
}

#[test]
fn step_on_empty_field_is_noop() {
    let mut f = field(0.0, 0.0);
    f.step(&mut rng());
    assert_eq!(f.column_count(), 0);
}

// =============================================================
// resize
// =============================================================

#[test]
fn resize_recomputes_column_count() {
    let mut f = field(800.0, 600.0);
    f.resize(1280.0, 720.0, &mut rng());
    assert_eq!(f.column_count(), column_count(1280.0, GLYPH_SIZE));
    assert_eq!(f.column_count(), 71);
    assert_eq!(f.height(), 720.0);
}

#[test]
fn resize_smaller_drops_excess_columns_and_keeps_the_rest() {
    let mut f = field(900.0, 600.0);
    let before = f.columns()[..10].to_vec();
    f.resize(180.0, 600.0, &mut rng());
    assert_eq!(f.column_count(), 10);
    assert_eq!(f.columns(), before.as_slice());
}

#[test]
fn resize_to_zero_width_clears_columns() {
    let mut f = field(900.0, 600.0);
    f.resize(0.0, 600.0, &mut rng());
    assert_eq!(f.column_count(), 0);
}
