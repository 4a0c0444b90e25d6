use crate::classifier::sample::PixelSample;

// Channel-threshold rules for each color signal. A pixel can hit several
// signals at once; each hit adds that signal's weight.

const GRAYISH_COLORFULNESS_MAX: i16 = 30;

const BROWN_RED_MIN: i16 = 100;
const BROWN_BLUE_MAX: i16 = 100;
const BROWN_HIT_WEIGHT: f32 = 1.5;

const WHITE_BRIGHTNESS_MIN: f32 = 200.0;
const WHITE_HIT_WEIGHT: f32 = 1.2;

const METALLIC_BRIGHTNESS_MIN: f32 = 100.0;
const METALLIC_BRIGHTNESS_MAX: f32 = 200.0;
const METALLIC_HIT_WEIGHT: f32 = 1.4;

const REFLECTIVE_BRIGHTNESS_MIN: f32 = 200.0;
const REFLECTIVE_CHANNEL_SPREAD_MAX: i16 = 20;
const REFLECTIVE_SPREAD_BRIGHTNESS_MIN: f32 = 160.0;
const REFLECTIVE_HIT_WEIGHT: f32 = 1.0;

const COLORFUL_COLORFULNESS_MIN: i16 = 100;
const COLORFUL_PEAK_CHANNEL_MIN: i16 = 180;
const COLORFUL_PEAK_COLORFULNESS_MIN: i16 = 60;
const COLORFUL_HIT_WEIGHT: f32 = 1.2;

const DARK_BRIGHTNESS_MAX: f32 = 60.0;
const DARK_HIT_WEIGHT: f32 = 1.0;

const GREEN_TINT_LEAD: i16 = 30;
const GREEN_TINT_HIT_WEIGHT: f32 = 1.1;

const BLUE_TINT_LEAD_OVER_RED: i16 = 30;
const BLUE_TINT_LEAD_OVER_GREEN: i16 = 20;
const BLUE_TINT_HIT_WEIGHT: f32 = 1.1;

/// Accumulated weight per color signal. One instance per classification
/// call; fed one sample at a time.
#[derive(Debug, Clone, Default)]
pub struct SignalCounters {
    pub brown: f32,
    pub white: f32,
    pub metallic_gray: f32,
    pub reflective: f32,
    pub colorful: f32,
    pub dark: f32,
    pub green_tint: f32,
    pub blue_tint: f32,
}

impl SignalCounters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn observe(&mut self, sample: &PixelSample) {
        let red = i16::from(sample.red);
        let green = i16::from(sample.green);
        let blue = i16::from(sample.blue);

        let brightness = f32::from(red + green + blue) / 3.0;
        let colorfulness =
            (red - green).abs() + (red - blue).abs() + (green - blue).abs();
        let grayish = colorfulness < GRAYISH_COLORFULNESS_MAX;

        let peak = red.max(green).max(blue);
        let channel_spread = peak - red.min(green).min(blue);

        // Browns and tans
        if red > BROWN_RED_MIN && red > green && green > blue && blue < BROWN_BLUE_MAX {
            self.brown += BROWN_HIT_WEIGHT;
        }

        // Whites and off-whites
        if brightness > WHITE_BRIGHTNESS_MIN && colorfulness < GRAYISH_COLORFULNESS_MAX {
            self.white += WHITE_HIT_WEIGHT;
        }

        // Mid-brightness grays, silver tones
        if brightness > METALLIC_BRIGHTNESS_MIN
            && brightness < METALLIC_BRIGHTNESS_MAX
            && grayish
        {
            self.metallic_gray += METALLIC_HIT_WEIGHT;
        }

        // Bright neutral surfaces read as reflections
        if (brightness > REFLECTIVE_BRIGHTNESS_MIN && grayish)
            || (channel_spread < REFLECTIVE_CHANNEL_SPREAD_MAX
                && brightness > REFLECTIVE_SPREAD_BRIGHTNESS_MIN)
        {
            self.reflective += REFLECTIVE_HIT_WEIGHT;
        }

        // Saturated or vividly peaked colors
        if colorfulness > COLORFUL_COLORFULNESS_MIN
            || (peak > COLORFUL_PEAK_CHANNEL_MIN
                && colorfulness > COLORFUL_PEAK_COLORFULNESS_MIN)
        {
            self.colorful += COLORFUL_HIT_WEIGHT;
        }

        if brightness < DARK_BRIGHTNESS_MAX {
            self.dark += DARK_HIT_WEIGHT;
        }

        if green > red + GREEN_TINT_LEAD && green > blue + GREEN_TINT_LEAD {
            self.green_tint += GREEN_TINT_HIT_WEIGHT;
        }

        if blue > red + BLUE_TINT_LEAD_OVER_RED && blue > green + BLUE_TINT_LEAD_OVER_GREEN {
            self.blue_tint += BLUE_TINT_HIT_WEIGHT;
        }
    }
}
