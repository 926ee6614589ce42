use crate::math::Spectrum;

/// Phong surface description
///
/// Copied by value into each primitive at construction and never mutated
/// afterwards. Coefficients are not required to sum to one.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Material {
    /// Surface color, each channel in `[0, 1]`
    pub color: Spectrum<f32>,
    /// Ambient coefficient
    pub ambient: f32,
    /// Diffuse coefficient
    pub diffuse: f32,
    /// Specular coefficient
    pub specular: f32,
    /// Fraction of the reflected contribution blended in, `[0, 1]`
    pub reflectivity: f32,
    /// Specular lobe exponent, must be positive
    pub shininess: f32,
}

impl Material {
    /// Creates a new `Material`, validating all values.
    ///
    /// Validation happens here, before any rendering starts. The shading code
    /// assumes materials are well-formed and never re-checks mid-frame.
    pub fn new(
        color: Spectrum<f32>,
        ambient: f32,
        diffuse: f32,
        specular: f32,
        reflectivity: f32,
        shininess: f32,
    ) -> crate::Result<Self> {
        for (name, channel) in [("r", color.r), ("g", color.g), ("b", color.b)] {
            if !(0.0..=1.0).contains(&channel) {
                return Err(format!("Material color channel {name} is outside [0, 1]: {channel}").into());
            }
        }
        for (name, coeff) in [
            ("ambient", ambient),
            ("diffuse", diffuse),
            ("specular", specular),
        ] {
            if coeff < 0.0 {
                return Err(format!("Material {name} coefficient is negative: {coeff}").into());
            }
        }
        if !(0.0..=1.0).contains(&reflectivity) {
            return Err(format!("Material reflectivity is outside [0, 1]: {reflectivity}").into());
        }
        if shininess <= 0.0 {
            return Err(format!("Material shininess is not positive: {shininess}").into());
        }

        Ok(Self {
            color,
            ambient,
            diffuse,
            specular,
            reflectivity,
            shininess,
        })
    }
}
