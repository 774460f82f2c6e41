use wide::f32x4;

/// Blends a dry and a wet signal: `mix * wet + (1 - mix) * dry`.
#[inline(always)]
pub fn blend(dry: f32, wet: f32, mix: f32) -> f32 {
    mix * wet + (1.0 - mix) * dry
}

/// Blends `wet` into `buffer` in place, `buffer` holding the dry signal.
///
/// Gives the same result as calling [`blend`] per sample.
pub fn blend_into(buffer: &mut [f32], wet: &[f32], mix: f32) {
    let len = buffer.len().min(wet.len());
    let buffer = &mut buffer[..len];
    let wet = &wet[..len];

    let mix_vec = f32x4::splat(mix);
    let dry_vec = f32x4::splat(1.0 - mix);

    let (dry_chunks, dry_rem) = buffer.as_chunks_mut::<4>();
    let (wet_chunks, wet_rem) = wet.as_chunks::<4>();

    for (dry_c, wet_c) in dry_chunks.iter_mut().zip(wet_chunks.iter()) {
        let dry = f32x4::from(*dry_c);
        let wet = f32x4::from(*wet_c);
        let res = mix_vec * wet + dry_vec * dry;
        *dry_c = res.to_array();
    }

    for (dry_s, wet_s) in dry_rem.iter_mut().zip(wet_rem.iter()) {
        *dry_s = blend(*dry_s, *wet_s, mix);
    }
}
