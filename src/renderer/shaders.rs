//! Embedded equirect shader sources and the canonical attribute and
//! uniform name lists used to resolve locations at program creation.

/// Attribute names, in bind order.
pub const ATTRIBUTES: &[&str] = &["aVertexPosition", "aTextureCoord"];

/// Uniform names resolved once at construction.
pub const UNIFORMS: &[&str] = &[
    "uPInvMatrix",
    "uDepth",
    "vccMatrix",
    "uSampler",
    "uOpacity",
    "uWidth",
    "uHeight",
    "colorOffset",
    "colorMatrix",
    "textureX",
    "textureY",
    "textureWidth",
    "textureHeight",
];

/// Vertex stage: positions the unit quad in clip space at the layer's
/// depth and emits the un-projected view ray for the fragment stage.
pub const VERTEX: &str = r#"
attribute vec3 aVertexPosition;
attribute vec2 aTextureCoord;

uniform float uDepth;
uniform mat4 uPInvMatrix;
uniform mat4 vccMatrix;

varying vec4 vRay;

void main(void) {
  gl_Position = vccMatrix * vec4(aVertexPosition.xy, uDepth, 1.0);
  vRay = uPInvMatrix * vec4(aVertexPosition.xy, 1.0, 1.0);
}
"#;

/// Fragment stage: turns the interpolated view ray into equirectangular
/// texture coordinates, applies the crop remap and the pixel effects.
pub const FRAGMENT: &str = r#"
#ifdef GL_FRAGMENT_PRECISION_HIGH
precision highp float;
#else
precision mediump float;
#endif

uniform sampler2D uSampler;
uniform float uOpacity;
uniform float textureX;
uniform float textureY;
uniform float textureWidth;
uniform float textureHeight;
uniform vec4 colorOffset;
uniform mat4 colorMatrix;

varying vec4 vRay;

const float PI = 3.14159265358979323846264;

void main(void) {
  float r = inversesqrt(vRay.x * vRay.x + vRay.y * vRay.y + vRay.z * vRay.z);
  float phi = acos(vRay.y * r);
  float theta = atan(vRay.x, -vRay.z);

  float s = 0.5 + 0.5 * theta / PI;
  float t = phi / PI;

  s = textureX + textureWidth * s;
  t = textureY + textureHeight * t;

  vec4 color = texture2D(uSampler, vec2(s, t));
  gl_FragColor = (colorMatrix * color + colorOffset) * vec4(uOpacity);
}
"#;
