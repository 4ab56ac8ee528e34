//! Build script -- renders the application icon to `assets/icon.ico` and
//! embeds it, with the DPI-aware application manifest, as a Windows resource.

const ICON_PATH: &str = "assets/icon.ico";
const ICON_SIZES: [u32; 4] = [64, 48, 32, 16];

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    if !std::path::Path::new(ICON_PATH).exists() {
        std::fs::create_dir_all("assets").ok();
        let images: Vec<(u32, Vec<u8>)> = ICON_SIZES
            .iter()
            .map(|&size| (size, render_icon_rgba(size)))
            .collect();
        if let Err(e) = std::fs::write(ICON_PATH, encode_ico(&images)) {
            println!("cargo:warning=Failed to write icon: {e}");
        }
    }

    if std::env::var("CARGO_CFG_TARGET_OS").unwrap_or_default() != "windows" {
        return;
    }

    let mut res = winresource::WindowsResource::new();
    res.set_manifest(
        r#"
<assembly xmlns="urn:schemas-microsoft-com:asm.v1" manifestVersion="1.0">
  <trustInfo xmlns="urn:schemas-microsoft-com:asm.v3">
    <security>
      <requestedPrivileges>
        <requestedExecutionLevel level="asInvoker" uiAccess="false"/>
      </requestedPrivileges>
    </security>
  </trustInfo>
  <application xmlns="urn:schemas-microsoft-com:asm.v3">
    <windowsSettings>
      <dpiAwareness xmlns="http://schemas.microsoft.com/SMI/2016/WindowsSettings">PerMonitorV2</dpiAwareness>
    </windowsSettings>
  </application>
</assembly>
"#,
    );
    if std::path::Path::new(ICON_PATH).exists() {
        res.set_icon(ICON_PATH);
    }
    res.set("ProductName", "AutoGallery");
    res.set("FileDescription", "AutoGallery -- before/after work showcase");
    if let Err(e) = res.compile() {
        println!("cargo:warning=Failed to compile Windows resources: {e}");
    }
}

// ════════════════════════════════════════════════════════════════
// ICO container
// ════════════════════════════════════════════════════════════════

/// Pack square RGBA images into an ICO file.
fn encode_ico(images: &[(u32, Vec<u8>)]) -> Vec<u8> {
    let entries: Vec<(u32, Vec<u8>)> = images
        .iter()
        .map(|(size, rgba)| (*size, bmp_entry(rgba, *size)))
        .collect();

    let mut ico = Vec::new();
    ico.extend_from_slice(&0u16.to_le_bytes());
    ico.extend_from_slice(&1u16.to_le_bytes());
    ico.extend_from_slice(&(entries.len() as u16).to_le_bytes());

    let mut offset = 6 + 16 * entries.len();
    for (size, bmp) in &entries {
        let dim = if *size >= 256 { 0 } else { *size as u8 };
        ico.extend_from_slice(&[dim, dim, 0, 0]);
        ico.extend_from_slice(&1u16.to_le_bytes());
        ico.extend_from_slice(&32u16.to_le_bytes());
        ico.extend_from_slice(&(bmp.len() as u32).to_le_bytes());
        ico.extend_from_slice(&(offset as u32).to_le_bytes());
        offset += bmp.len();
    }
    for (_, bmp) in &entries {
        ico.extend_from_slice(bmp);
    }
    ico
}

/// 32-bit BMP (BGRA, bottom-up) plus 1-bit AND mask for one ICO entry.
fn bmp_entry(rgba: &[u8], size: u32) -> Vec<u8> {
    let mut bmp = Vec::new();
    let header: [u32; 10] = [40, size, size * 2, 1 | (32 << 16), 0, 0, 0, 0, 0, 0];
    for field in header {
        bmp.extend_from_slice(&field.to_le_bytes());
    }

    for y in (0..size).rev() {
        for x in 0..size {
            let i = ((y * size + x) * 4) as usize;
            bmp.extend_from_slice(&[rgba[i + 2], rgba[i + 1], rgba[i], rgba[i + 3]]);
        }
    }

    let row_bytes = (size.div_ceil(32) * 4) as usize;
    for y in (0..size).rev() {
        let mut row = vec![0u8; row_bytes];
        for x in 0..size {
            if rgba[((y * size + x) * 4 + 3) as usize] < 128 {
                row[(x / 8) as usize] |= 0x80 >> (x % 8);
            }
        }
        bmp.extend_from_slice(&row);
    }
    bmp
}

// ════════════════════════════════════════════════════════════════
// Icon rendering (mirrors crates/autogallery-gui/src/icon.rs; the
// build script cannot depend on workspace crates)
// ════════════════════════════════════════════════════════════════

fn render_icon_rgba(size: u32) -> Vec<u8> {
    const BEFORE: [u8; 3] = [0x6b, 0x62, 0x5a];
    const SCRATCH: [u8; 3] = [0x45, 0x3e, 0x38];
    const AFTER: [u8; 3] = [0xdc, 0x26, 0x26];
    const WHITE: [u8; 3] = [0xff, 0xff, 0xff];

    let s = size as f32;
    let centre = s * 0.5;
    let tile_half = s * 0.44;
    let tile_radius = s * 0.16;
    let bar_half = (s * 0.03).max(0.75);
    let grip_radius = s * 0.15;
    let grip_ring = (s * 0.035).max(1.0);

    let mut pixels = vec![0u8; (size * size * 4) as usize];
    for y in 0..size {
        for x in 0..size {
            let px = x as f32 + 0.5;
            let py = y as f32 + 0.5;
            let qx = (px - centre).abs() - (tile_half - tile_radius);
            let qy = (py - centre).abs() - (tile_half - tile_radius);
            let tile_sd = (qx.max(0.0).powi(2) + qy.max(0.0).powi(2)).sqrt()
                + qx.max(qy).min(0.0)
                - tile_radius;
            let mut alpha = ico_edge(tile_sd, 0.0);
            if alpha <= 0.0 {
                continue;
            }

            let mut rgb = if px < centre {
                if ((px + py) / (s * 0.12)).fract() < 0.18 {
                    SCRATCH
                } else {
                    BEFORE
                }
            } else {
                let gloss = (1.0 - py / s).clamp(0.0, 1.0) * 0.25;
                [
                    ico_lerp(AFTER[0], 0xff, gloss),
                    ico_lerp(AFTER[1], 0xff, gloss * 0.6),
                    ico_lerp(AFTER[2], 0xff, gloss * 0.6),
                ]
            };

            rgb = ico_mix(rgb, WHITE, ico_edge((px - centre).abs(), bar_half));

            let dist = ((px - centre).powi(2) + (py - centre).powi(2)).sqrt();
            if dist < grip_radius + 1.5 {
                let outer = ico_edge(dist, grip_radius);
                rgb = ico_mix(rgb, WHITE, outer);
                rgb = ico_mix(rgb, AFTER, ico_edge(dist, grip_radius - grip_ring));
                alpha = alpha.max(outer);
            }

            let i = ((y * size + x) * 4) as usize;
            pixels[i..i + 3].copy_from_slice(&rgb);
            pixels[i + 3] = (alpha * 255.0).clamp(0.0, 255.0) as u8;
        }
    }
    pixels
}

fn ico_edge(dist: f32, edge: f32) -> f32 {
    (0.5 - (dist - edge) * 0.5).clamp(0.0, 1.0)
}

fn ico_lerp(a: u8, b: u8, t: f32) -> u8 {
    (a as f32 * (1.0 - t) + b as f32 * t).clamp(0.0, 255.0) as u8
}

fn ico_mix(a: [u8; 3], b: [u8; 3], t: f32) -> [u8; 3] {
    [ico_lerp(a[0], b[0], t), ico_lerp(a[1], b[1], t), ico_lerp(a[2], b[2], t)]
}
