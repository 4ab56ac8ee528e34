//! AutoGallery application icon generator.
//!
//! Produces a procedural icon: a rounded tile split down the middle into a
//! dull "before" panel and a glossy red "after" panel, with the comparator
//! handle (white bar and round grip) on the split. Rendered at an arbitrary
//! resolution as RGBA pixel data for the window icon.

/// Generate an AutoGallery icon as egui `IconData`.
pub fn generate_icon(size: u32) -> egui::IconData {
    let rgba = render_icon(size);
    egui::IconData {
        rgba,
        width: size,
        height: size,
    }
}

const BEFORE_RGB: [u8; 3] = [0x6b, 0x62, 0x5a];
const SCRATCH_RGB: [u8; 3] = [0x45, 0x3e, 0x38];
const AFTER_RGB: [u8; 3] = [0xdc, 0x26, 0x26];
const HANDLE_RGB: [u8; 3] = [0xff, 0xff, 0xff];

/// Render the icon into an RGBA pixel buffer (top-to-bottom row order).
pub fn render_icon(size: u32) -> Vec<u8> {
    let s = size as f32;
    let mut pixels = vec![0u8; (size * size * 4) as usize];

    // ── Layout ──────────────────────────────────────────────────
    let tile_half = s * 0.44;
    let tile_radius = s * 0.16;
    let centre = s * 0.5;
    let bar_half = (s * 0.03).max(0.75);
    let grip_radius = s * 0.15;
    let grip_ring = (s * 0.035).max(1.0);

    for y in 0..size {
        for x in 0..size {
            let px = x as f32 + 0.5;
            let py = y as f32 + 0.5;

            // 1. Tile, split into before / after. ────────────────
            let tile_sd = rounded_rect_sd(px - centre, py - centre, tile_half, tile_radius);
            let mut ca = smooth_edge(tile_sd, 0.0);
            if ca <= 0.0 {
                continue;
            }

            let [mut cr, mut cg, mut cb] = if px < centre {
                // Diagonal scratches on the worn side.
                let stripe = ((px + py) / (s * 0.12)).fract();
                if stripe < 0.18 {
                    SCRATCH_RGB
                } else {
                    BEFORE_RGB
                }
            } else {
                // Gloss: brighter toward the upper edge.
                let gloss = (1.0 - (py / s)).clamp(0.0, 1.0) * 0.25;
                [
                    lerp_c(AFTER_RGB[0], 0xff, gloss),
                    lerp_c(AFTER_RGB[1], 0xff, gloss * 0.6),
                    lerp_c(AFTER_RGB[2], 0xff, gloss * 0.6),
                ]
            };

            // 2. Handle bar. ─────────────────────────────────────
            let bar_aa = smooth_edge((px - centre).abs(), bar_half);
            cr = lerp_c(cr, HANDLE_RGB[0], bar_aa);
            cg = lerp_c(cg, HANDLE_RGB[1], bar_aa);
            cb = lerp_c(cb, HANDLE_RGB[2], bar_aa);

            // 3. Grip: white ring around a red disc. ─────────────
            let dx = px - centre;
            let dy = py - centre;
            let dist = (dx * dx + dy * dy).sqrt();
            if dist < grip_radius + 1.5 {
                let outer = smooth_edge(dist, grip_radius);
                cr = lerp_c(cr, HANDLE_RGB[0], outer);
                cg = lerp_c(cg, HANDLE_RGB[1], outer);
                cb = lerp_c(cb, HANDLE_RGB[2], outer);

                let inner = smooth_edge(dist, grip_radius - grip_ring);
                cr = lerp_c(cr, AFTER_RGB[0], inner);
                cg = lerp_c(cg, AFTER_RGB[1], inner);
                cb = lerp_c(cb, AFTER_RGB[2], inner);
                ca = ca.max(outer);
            }

            let idx = ((y * size + x) * 4) as usize;
            pixels[idx] = cr;
            pixels[idx + 1] = cg;
            pixels[idx + 2] = cb;
            pixels[idx + 3] = (ca * 255.0).clamp(0.0, 255.0) as u8;
        }
    }

    pixels
}

// ── Helpers ─────────────────────────────────────────────────────

/// Smooth anti-aliased edge (1 → 0 as `dist` crosses `edge`).
fn smooth_edge(dist: f32, edge: f32) -> f32 {
    let d = dist - edge;
    if d < -1.0 {
        1.0
    } else if d > 1.0 {
        0.0
    } else {
        0.5 - d * 0.5
    }
}

/// Signed distance from a point (relative to the centre) to a rounded
/// square with the given half-extent and corner radius.
fn rounded_rect_sd(dx: f32, dy: f32, half: f32, radius: f32) -> f32 {
    let qx = dx.abs() - (half - radius);
    let qy = dy.abs() - (half - radius);
    let outside = (qx.max(0.0).powi(2) + qy.max(0.0).powi(2)).sqrt();
    let inside = qx.max(qy).min(0.0);
    outside + inside - radius
}

/// Linear interpolation for a single colour channel.
fn lerp_c(a: u8, b: u8, t: f32) -> u8 {
    (a as f32 * (1.0 - t) + b as f32 * t).clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buffer_matches_requested_size() {
        let icon = generate_icon(32);
        assert_eq!(icon.width, 32);
        assert_eq!(icon.rgba.len(), 32 * 32 * 4);
    }

    #[test]
    fn corners_are_transparent_and_centre_is_opaque() {
        let size = 64;
        let rgba = render_icon(size);
        assert_eq!(rgba[3], 0, "top-left corner should be transparent");
        let mid = ((size / 2 * size + size / 2) * 4) as usize;
        assert_eq!(rgba[mid + 3], 255);
    }
}
