/// Expands kernel templates for a specific ISA and Element type.
///
/// This macro is the "Layer 3" of the architecture. It takes a module name,
/// an ISA identifier, an element type, an optional target feature and the list
/// of `name => unroll` variants, and generates a module containing every
/// variant for that combination.
///
/// ```ignore
/// expand_isa_impls!(sse2_f32, sse2, f32, feature = "sse2",
///     [relu_ukernel_x4 => 1, relu_ukernel_x8 => 2]);
/// ```
#[macro_export]
macro_rules! expand_isa_impls {
    ($module_name:ident, $isa:ident, $elem:ident, feature = $feature:literal,
     [$($ukernel:ident => $unroll:literal),+ $(,)?]) => {
        pub mod $module_name {
            $(
                $crate::define_relu_ukernel!($isa, $elem, $ukernel, $unroll, $feature);
            )+
        }
    };
    ($module_name:ident, $isa:ident, $elem:ident,
     [$($ukernel:ident => $unroll:literal),+ $(,)?]) => {
        pub mod $module_name {
            $(
                $crate::define_relu_ukernel!($isa, $elem, $ukernel, $unroll);
            )+
        }
    };
}
