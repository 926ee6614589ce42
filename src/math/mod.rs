mod common;
mod normal;
mod point;
mod ray;
mod spectrum;
mod vector;

pub use common::{FloatValueType, ValueType};
pub use normal::Normal;
pub use point::Point3;
pub use ray::Ray;
pub use spectrum::Spectrum;
pub use vector::{vec2, vec3, Vec2, Vec3};

/// Implements [`approx::AbsDiffEq`] and [`approx::RelativeEq`] component-wise
/// for a math container with the listed fields.
#[macro_export]
macro_rules! impl_approx_eq {
    ( $( $t:ident [ $( $component:ident )+ ] ),+ $(,)? ) => {
        $(
            impl<T> approx::AbsDiffEq for $t<T>
            where
                T: $crate::math::FloatValueType + approx::AbsDiffEq<Epsilon = T>,
            {
                type Epsilon = T;

                fn default_epsilon() -> T {
                    T::default_epsilon()
                }

                fn abs_diff_eq(&self, other: &Self, epsilon: T) -> bool {
                    $( T::abs_diff_eq(&self.$component, &other.$component, epsilon) )&&+
                }
            }

            impl<T> approx::RelativeEq for $t<T>
            where
                T: $crate::math::FloatValueType + approx::RelativeEq<Epsilon = T>,
            {
                fn default_max_relative() -> T {
                    T::default_max_relative()
                }

                fn relative_eq(&self, other: &Self, epsilon: T, max_relative: T) -> bool {
                    $( T::relative_eq(&self.$component, &other.$component, epsilon, max_relative) )&&+
                }
            }
        )+
    };
}
