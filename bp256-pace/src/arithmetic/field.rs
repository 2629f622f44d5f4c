//! Field arithmetic modulo p = 0xa9fb57dba1eea9bc3e660a909d838d726e3bf623d52620282013481d1f6e5377

field_element!(
    name: FieldElement,
    params: FieldModulus,
    modulus: "a9fb57dba1eea9bc3e660a909d838d726e3bf623d52620282013481d1f6e5377",
    multiplicative_generator: 11,
    doc: "Element of the brainpoolP256r1 base field used for curve point coordinates."
);
