//! The bundled SVG source under analysis.

/// Icon traced by potrace, kept verbatim as the program's only input.
///
/// The header declares a 1024x1024pt canvas and a group transform of
/// `translate(0,1024) scale(0.1,-0.1)`, the usual potrace arrangement for
/// flipping the raster y-axis back into SVG coordinates.
pub const ICON_SVG: &str = r##"<?xml version="1.0" standalone="no"?>
<!DOCTYPE svg PUBLIC "-//W3C//DTD SVG 1.1//EN"
  "http://www.w3.org/Graphics/SVG/1.1/DTD/svg11.dtd">
<svg width="1024.000000pt" height="1024.000000pt" viewBox="0 0 1024.000000 1024.000000"
  xmlns="http://www.w3.org/2000/svg" version="1.1" preserveAspectRatio="xMidYMid meet">
  <metadata>
Created by potrace, written by Peter Selinger 2001-2019
</metadata>
  <g transform="translate(0.000000,1024.000000) scale(0.100000,-0.100000)"
fill="#000000" stroke="none">
<path d="M3355 9084 c-16 -2 -70 -9 -120 -15 -379 -43 -775 -194 -1070 -410 -272
-200 -507 -470 -670 -765 -104 -187 -198 -452 -235 -662 -17 -97 -20 -155 -20
-372 0 -281 19 -402 96 -632 159 -467 493 -880 921 -1136 279 -167 573 -252
918 -272 77 -5 143 -10 148 -13 4 -2 7 -27 7 -55 0 -48 -2 -52 -27 -58 -16 -3
-55 -15 -88 -26 -261 -85 -455 -311 -510 -593 -18 -95 -18 -255 0 -350 55 -282
249 -508 510 -593 33 -11 72 -23 88 -26 25 -6 27 -10 27 -58 0 -28 -3 -53 -7
-55 -5 -3 -71 -8 -148 -13 -345 -20 -639 -105 -918 -272 -428 -256 -762 -669
-921 -1136 -77 -230 -96 -351 -96 -632 0 -217 3 -275 20 -372 37 -210 131 -475
235 -662 163 -295 398 -565 670 -765 295 -216 691 -367 1070 -410 50 -6 104 -13
120 -15 17 -2 727 -4 1580 -4 l1550 0 0 3600 0 3600 -1550 0 c-853 0 -1563 -2
-1580 -4z m1260 -2489 c47 -23 87 -64 109 -111 16 -35 21 -64 21 -134 0 -70 -5
-99 -21 -134 -22 -47 -62 -88 -109 -111 -35 -16 -64 -21 -134 -21 -70 0 -99 5
-134 21 -47 23 -87 64 -109 111 -16 35 -21 64 -21 134 0 70 5 99 21 134 22 47
62 88 109 111 35 16 64 21 134 21 70 0 99 -5 134 -21z m-415 -2930 c47 -23 87
-64 109 -111 16 -35 21 -64 21 -134 0 -70 -5 -99 -21 -134 -22 -47 -62 -88 -109
-111 -35 -16 -64 -21 -134 -21 -70 0 -99 5 -134 21 -47 23 -87 64 -109 111 -16
35 -21 64 -21 134 0 70 5 99 21 134 22 47 62 88 109 111 35 16 64 21 134 21
70 0 99 -5 134 -21z" fill="#0ea5e9"/>
<path d="M3355 9084 c-16 -2 -70 -9 -120 -15 -379 -43 -775 -194 -1070 -410 -272
-200 -507 -470 -670 -765 -104 -187 -198 -452 -235 -662 -17 -97 -20 -155 -20
-372 0 -281 19 -402 96 -632 159 -467 493 -880 921 -1136 279 -167 573 -252
918 -272 77 -5 143 -10 148 -13 4 -2 7 -27 7 -55 0 -48 -2 -52 -27 -58 -16 -3
-55 -15 -88 -26 -261 -85 -455 -311 -510 -593 -18 -95 -18 -255 0 -350 55 -282
249 -508 510 -593 33 -11 72 -23 88 -26 25 -6 27 -10 27 -58 0 -28 -3 -53 -7
-55 -5 -3 -71 -8 -148 -13 -345 -20 -639 -105 -918 -272 -428 -256 -762 -669
-921 -1136 -77 -230 -96 -351 -96 -632 0 -217 3 -275 20 -372 37 -210 131 -475
235 -662 163 -295 398 -565 670 -765 295 -216 691 -367 1070 -410 50 -6 104 -13
120 -15 17 -2 727 -4 1580 -4 l1550 0 0 3600 0 3600 -1550 0 c-853 0 -1563 -2
-1580 -4z m1260 -2489 c47 -23 87 -64 109 -111 16 -35 21 -64 21 -134 0 -70 -5
-99 -21 -134 -22 -47 -62 -88 -109 -111 -35 -16 -64 -21 -134 -21 -70 0 -99 5
-134 21 -47 23 -87 64 -109 111 -16 35 -21 64 -21 134 0 70 5 99 21 134 22 47
62 88 109 111 35 16 64 21 134 21 70 0 99 -5 134 -21z m-415 -2930 c47 -23 87
-64 109 -111 16 -35 21 -64 21 -134 0 -70 -5 -99 -21 -134 -22 -47 -62 -88 -109
-111 -35 -16 -64 -21 -134 -21 -70 0 -99 5 -134 21 -47 23 -87 64 -109 111 -16
35 -21 64 -21 134 0 70 5 99 21 134 22 47 62 88 109 111 35 16 64 21 134 21
70 0 99 -5 134 -21z" fill="#0ea5e9"/>
</g>
</svg>"##;
