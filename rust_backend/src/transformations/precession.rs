//! IAU 1976 precession between the J2000.0 mean frame and the mean frame of date.
//!
//! The precession matrix is built the way ERFA's `pmat76` builds it,
//!
//! ```text
//! P = Rz(-z) · Ry(θ) · Rz(-ζ)
//! ```
//!
//! with ζ, z, θ the Lieske (1977) polynomials in Julian centuries since J2000.0. `P` rotates a J2000 vector into
//! the frame of date; its transpose goes back. UTC is used in place of TT, which shifts the epoch by about a
//! minute and the position by far less than an arcsecond.

use altaz_units::{AngleUnit, AngleValue};
use std::f64::consts::PI;
use std::ops::Mul;

use crate::core::EquatorialCoordinate;
use crate::time::TimeInstant;

const ARCSEC_TO_RAD: f64 = PI / (180.0 * 3600.0);

/// A 3x3 rotation matrix, row-major, ERFA sign conventions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotationMatrix3 {
    elements: [[f64; 3]; 3],
}

impl RotationMatrix3 {
    pub fn identity() -> Self {
        Self {
            elements: [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
        }
    }

    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.elements[row][col]
    }

    /// Left-multiplies by a rotation of `theta` radians about the Y axis.
    pub fn rotate_y(&mut self, theta: f64) {
        let (s, c) = theta.sin_cos();
        let e = &mut self.elements;
        for col in 0..3 {
            let a0 = c * e[0][col] - s * e[2][col];
            let a2 = s * e[0][col] + c * e[2][col];
            e[0][col] = a0;
            e[2][col] = a2;
        }
    }

    /// Left-multiplies by a rotation of `psi` radians about the Z axis.
    pub fn rotate_z(&mut self, psi: f64) {
        let (s, c) = psi.sin_cos();
        let e = &mut self.elements;
        for col in 0..3 {
            let a0 = c * e[0][col] + s * e[1][col];
            let a1 = -s * e[0][col] + c * e[1][col];
            e[0][col] = a0;
            e[1][col] = a1;
        }
    }

    pub fn transpose(&self) -> Self {
        let e = &self.elements;
        Self {
            elements: [
                [e[0][0], e[1][0], e[2][0]],
                [e[0][1], e[1][1], e[2][1]],
                [e[0][2], e[1][2], e[2][2]],
            ],
        }
    }

    pub fn apply_to_vector(&self, v: [f64; 3]) -> [f64; 3] {
        let e = &self.elements;
        [
            e[0][0] * v[0] + e[0][1] * v[1] + e[0][2] * v[2],
            e[1][0] * v[0] + e[1][1] * v[1] + e[1][2] * v[2],
            e[2][0] * v[0] + e[2][1] * v[1] + e[2][2] * v[2],
        ]
    }

    /// Rotates a direction given as (longitude, latitude) in radians; the returned longitude is in `(-π, π]`.
    pub fn transform_spherical(&self, lon: f64, lat: f64) -> (f64, f64) {
        let (sin_lon, cos_lon) = lon.sin_cos();
        let (sin_lat, cos_lat) = lat.sin_cos();
        let [x, y, z] = self.apply_to_vector([cos_lat * cos_lon, cos_lat * sin_lon, sin_lat]);
        let new_lon = y.atan2(x);
        let new_lat = z.atan2((x * x + y * y).sqrt());
        (new_lon, new_lat)
    }
}

impl Mul for RotationMatrix3 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        let mut out = [[0.0; 3]; 3];
        for (i, row) in out.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = (0..3).map(|k| self.elements[i][k] * rhs.elements[k][j]).sum();
            }
        }
        Self { elements: out }
    }
}

/// Precession angles `(ζ, z, θ)` in radians from J2000.0 to `t` Julian centuries later.
pub fn precession_angles(t: f64) -> (f64, f64, f64) {
    let zeta = (2306.2181 + (0.30188 + 0.017998 * t) * t) * t;
    let z = (2306.2181 + (1.09468 + 0.018203 * t) * t) * t;
    let theta = (2004.3109 + (-0.42665 - 0.041833 * t) * t) * t;
    (zeta * ARCSEC_TO_RAD, z * ARCSEC_TO_RAD, theta * ARCSEC_TO_RAD)
}

/// Matrix taking J2000.0 mean coordinates to mean coordinates of `time`.
pub fn precession_matrix(time: &TimeInstant) -> RotationMatrix3 {
    let (zeta, z, theta) = precession_angles(time.julian_centuries_since_j2000());
    let mut m = RotationMatrix3::identity();
    m.rotate_z(-zeta);
    m.rotate_y(theta);
    m.rotate_z(-z);
    m
}

fn rotate(coord: &EquatorialCoordinate, m: &RotationMatrix3) -> EquatorialCoordinate {
    let (ra, dec) = m.transform_spherical(
        coord.right_ascension().in_radians(),
        coord.declination().in_radians(),
    );
    let ra = AngleValue::new_unchecked(ra, AngleUnit::Radian).to(AngleUnit::Degree).wrap_pos();
    let dec = AngleValue::new_unchecked(dec, AngleUnit::Radian).to(AngleUnit::Degree);
    EquatorialCoordinate::from_parts(ra, dec)
}

/// Mean place of date → J2000.0 mean place.
pub fn precess_to_j2000(coord: &EquatorialCoordinate, time: &TimeInstant) -> EquatorialCoordinate {
    rotate(coord, &precession_matrix(time).transpose())
}

/// J2000.0 mean place → mean place of date.
pub fn precess_from_j2000(coord: &EquatorialCoordinate, time: &TimeInstant) -> EquatorialCoordinate {
    rotate(coord, &precession_matrix(time))
}
