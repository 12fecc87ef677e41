use super::K256;

#[inline(always)]
pub fn small_sigma0(x: u32) -> u32 {
    x.rotate_right(7) ^ x.rotate_right(18) ^ (x >> 3)
}

#[inline(always)]
pub fn small_sigma1(x: u32) -> u32 {
    x.rotate_right(17) ^ x.rotate_right(19) ^ (x >> 10)
}

#[inline(always)]
pub fn big_sigma0(x: u32) -> u32 {
    x.rotate_right(2) ^ x.rotate_right(13) ^ x.rotate_right(22)
}

#[inline(always)]
pub fn big_sigma1(x: u32) -> u32 {
    x.rotate_right(6) ^ x.rotate_right(11) ^ x.rotate_right(25)
}

#[inline(always)]
pub fn ch(e: u32, f: u32, g: u32) -> u32 {
    (e & f) ^ ((!e) & g)
}

#[inline(always)]
pub fn maj(a: u32, b: u32, c: u32) -> u32 {
    (a & b) ^ (a & c) ^ (b & c)
}

/// Runs the 64 SHA-256 rounds over one block and folds the result into
/// `state`.
///
/// The message schedule is kept as a 16-word ring: word `t` for `t >= 16`
/// overwrites slot `t mod 16`, which held `W[t-16]` and is no longer needed.
pub fn all_rounds(state: &mut [u32; 8], mut w: [u32; 16]) {
    let [mut a, mut b, mut c, mut d, mut e, mut f, mut g, mut h] = *state;

    for (t, &k) in K256.iter().enumerate() {
        if t >= 16 {
            let w16 = w[(t - 16) & 15];
            let w15 = w[(t - 15) & 15];
            let w7 = w[(t - 7) & 15];
            let w2 = w[(t - 2) & 15];

            w[t & 15] = w16
                .wrapping_add(small_sigma0(w15))
                .wrapping_add(w7)
                .wrapping_add(small_sigma1(w2));
        }

        let t1 = h
            .wrapping_add(big_sigma1(e))
            .wrapping_add(ch(e, f, g))
            .wrapping_add(w[t & 15])
            .wrapping_add(k);

        let t2 = big_sigma0(a).wrapping_add(maj(a, b, c));

        h = g;
        g = f;
        f = e;
        e = d.wrapping_add(t1);
        d = c;
        c = b;
        b = a;
        a = t1.wrapping_add(t2);
    }

    for (word, value) in state.iter_mut().zip([a, b, c, d, e, f, g, h]) {
        *word = word.wrapping_add(value);
    }
}
