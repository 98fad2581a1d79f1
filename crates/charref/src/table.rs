// @generated by charref-tablegen from crates/charref_tablegen/data/entities.json. Do not edit by hand.
//
// WHATWG named character references, sorted by name (byte order).
// Names omit the trailing `;`. `semicolon_required = false` marks the
// legacy references that also match without one.

use crate::record::EntityRecord;

pub(crate) const ENTITY_COUNT: usize = 2125;

pub(crate) static ENTITIES: [EntityRecord; ENTITY_COUNT] = [
    EntityRecord::new("AElig", &[0x00C6], false),
    EntityRecord::new("AMP", &[0x0026], false),
    EntityRecord::new("Aacute", &[0x00C1], false),
    EntityRecord::new("Abreve", &[0x0102], true),
    EntityRecord::new("Acirc", &[0x00C2], false),
    EntityRecord::new("Acy", &[0x0410], true),
    EntityRecord::new("Afr", &[0x1D504], true),
    EntityRecord::new("Agrave", &[0x00C0], false),
    EntityRecord::new("Alpha", &[0x0391], true),
    EntityRecord::new("Amacr", &[0x0100], true),
    EntityRecord::new("And", &[0x2A53], true),
    EntityRecord::new("Aogon", &[0x0104], true),
    EntityRecord::new("Aopf", &[0x1D538], true),
    EntityRecord::new("ApplyFunction", &[0x2061], true),
    EntityRecord::new("Aring", &[0x00C5], false),
    EntityRecord::new("Ascr", &[0x1D49C], true),
    EntityRecord::new("Assign", &[0x2254], true),
    EntityRecord::new("Atilde", &[0x00C3], false),
    EntityRecord::new("Auml", &[0x00C4], false),
    EntityRecord::new("Backslash", &[0x2216], true),
    EntityRecord::new("Barv", &[0x2AE7], true),
    EntityRecord::new("Barwed", &[0x2306], true),
    EntityRecord::new("Bcy", &[0x0411], true),
    EntityRecord::new("Because", &[0x2235], true),
    EntityRecord::new("Bernoullis", &[0x212C], true),
    EntityRecord::new("Beta", &[0x0392], true),
    EntityRecord::new("Bfr", &[0x1D505], true),
    EntityRecord::new("Bopf", &[0x1D539], true),
    EntityRecord::new("Breve", &[0x02D8], true),
    EntityRecord::new("Bscr", &[0x212C], true),
    EntityRecord::new("Bumpeq", &[0x224E], true),
    EntityRecord::new("CHcy", &[0x0427], true),
    EntityRecord::new("COPY", &[0x00A9], false),
    EntityRecord::new("Cacute", &[0x0106], true),
    EntityRecord::new("Cap", &[0x22D2], true),
    EntityRecord::new("CapitalDifferentialD", &[0x2145], true),
    EntityRecord::new("Cayleys", &[0x212D], true),
    EntityRecord::new("Ccaron", &[0x010C], true),
    EntityRecord::new("Ccedil", &[0x00C7], false),
    EntityRecord::new("Ccirc", &[0x0108], true),
    EntityRecord::new("Cconint", &[0x2230], true),
    EntityRecord::new("Cdot", &[0x010A], true),
    EntityRecord::new("Cedilla", &[0x00B8], true),
    EntityRecord::new("CenterDot", &[0x00B7], true),
    EntityRecord::new("Cfr", &[0x212D], true),
    EntityRecord::new("Chi", &[0x03A7], true),
    EntityRecord::new("CircleDot", &[0x2299], true),
    EntityRecord::new("CircleMinus", &[0x2296], true),
    EntityRecord::new("CirclePlus", &[0x2295], true),
    EntityRecord::new("CircleTimes", &[0x2297], true),
    EntityRecord::new("ClockwiseContourIntegral", &[0x2232], true),
    EntityRecord::new("CloseCurlyDoubleQuote", &[0x201D], true),
    EntityRecord::new("CloseCurlyQuote", &[0x2019], true),
    EntityRecord::new("Colon", &[0x2237], true),
    EntityRecord::new("Colone", &[0x2A74], true),
    EntityRecord::new("Congruent", &[0x2261], true),
    EntityRecord::new("Conint", &[0x222F], true),
    EntityRecord::new("ContourIntegral", &[0x222E], true),
    EntityRecord::new("Copf", &[0x2102], true),
    EntityRecord::new("Coproduct", &[0x2210], true),
    EntityRecord::new("CounterClockwiseContourIntegral", &[0x2233], true),
    EntityRecord::new("Cross", &[0x2A2F], true),
    EntityRecord::new("Cscr", &[0x1D49E], true),
    EntityRecord::new("Cup", &[0x22D3], true),
    EntityRecord::new("CupCap", &[0x224D], true),
    EntityRecord::new("DD", &[0x2145], true),
    EntityRecord::new("DDotrahd", &[0x2911], true),
    EntityRecord::new("DJcy", &[0x0402], true),
    EntityRecord::new("DScy", &[0x0405], true),
    EntityRecord::new("DZcy", &[0x040F], true),
    EntityRecord::new("Dagger", &[0x2021], true),
    EntityRecord::new("Darr", &[0x21A1], true),
    EntityRecord::new("Dashv", &[0x2AE4], true),
    EntityRecord::new("Dcaron", &[0x010E], true),
    EntityRecord::new("Dcy", &[0x0414], true),
    EntityRecord::new("Del", &[0x2207], true),
    EntityRecord::new("Delta", &[0x0394], true),
    EntityRecord::new("Dfr", &[0x1D507], true),
    EntityRecord::new("DiacriticalAcute", &[0x00B4], true),
    EntityRecord::new("DiacriticalDot", &[0x02D9], true),
    EntityRecord::new("DiacriticalDoubleAcute", &[0x02DD], true),
    EntityRecord::new("DiacriticalGrave", &[0x0060], true),
    EntityRecord::new("DiacriticalTilde", &[0x02DC], true),
    EntityRecord::new("Diamond", &[0x22C4], true),
    EntityRecord::new("DifferentialD", &[0x2146], true),
    EntityRecord::new("Dopf", &[0x1D53B], true),
    EntityRecord::new("Dot", &[0x00A8], true),
    EntityRecord::new("DotDot", &[0x20DC], true),
    EntityRecord::new("DotEqual", &[0x2250], true),
    EntityRecord::new("DoubleContourIntegral", &[0x222F], true),
    EntityRecord::new("DoubleDot", &[0x00A8], true),
    EntityRecord::new("DoubleDownArrow", &[0x21D3], true),
    EntityRecord::new("DoubleLeftArrow", &[0x21D0], true),
    EntityRecord::new("DoubleLeftRightArrow", &[0x21D4], true),
    EntityRecord::new("DoubleLeftTee", &[0x2AE4], true),
    EntityRecord::new("DoubleLongLeftArrow", &[0x27F8], true),
    EntityRecord::new("DoubleLongLeftRightArrow", &[0x27FA], true),
    EntityRecord::new("DoubleLongRightArrow", &[0x27F9], true),
    EntityRecord::new("DoubleRightArrow", &[0x21D2], true),
    EntityRecord::new("DoubleRightTee", &[0x22A8], true),
    EntityRecord::new("DoubleUpArrow", &[0x21D1], true),
    EntityRecord::new("DoubleUpDownArrow", &[0x21D5], true),
    EntityRecord::new("DoubleVerticalBar", &[0x2225], true),
    EntityRecord::new("DownArrow", &[0x2193], true),
    EntityRecord::new("DownArrowBar", &[0x2913], true),
    EntityRecord::new("DownArrowUpArrow", &[0x21F5], true),
    EntityRecord::new("DownBreve", &[0x0311], true),
    EntityRecord::new("DownLeftRightVector", &[0x2950], true),
    EntityRecord::new("DownLeftTeeVector", &[0x295E], true),
    EntityRecord::new("DownLeftVector", &[0x21BD], true),
    EntityRecord::new("DownLeftVectorBar", &[0x2956], true),
    EntityRecord::new("DownRightTeeVector", &[0x295F], true),
    EntityRecord::new("DownRightVector", &[0x21C1], true),
    EntityRecord::new("DownRightVectorBar", &[0x2957], true),
    EntityRecord::new("DownTee", &[0x22A4], true),
    EntityRecord::new("DownTeeArrow", &[0x21A7], true),
    EntityRecord::new("Downarrow", &[0x21D3], true),
    EntityRecord::new("Dscr", &[0x1D49F], true),
    EntityRecord::new("Dstrok", &[0x0110], true),
    EntityRecord::new("ENG", &[0x014A], true),
    EntityRecord::new("ETH", &[0x00D0], false),
    EntityRecord::new("Eacute", &[0x00C9], false),
    EntityRecord::new("Ecaron", &[0x011A], true),
    EntityRecord::new("Ecirc", &[0x00CA], false),
    EntityRecord::new("Ecy", &[0x042D], true),
    EntityRecord::new("Edot", &[0x0116], true),
    EntityRecord::new("Efr", &[0x1D508], true),
    EntityRecord::new("Egrave", &[0x00C8], false),
    EntityRecord::new("Element", &[0x2208], true),
    EntityRecord::new("Emacr", &[0x0112], true),
    EntityRecord::new("EmptySmallSquare", &[0x25FB], true),
    EntityRecord::new("EmptyVerySmallSquare", &[0x25AB], true),
    EntityRecord::new("Eogon", &[0x0118], true),
    EntityRecord::new("Eopf", &[0x1D53C], true),
    EntityRecord::new("Epsilon", &[0x0395], true),
    EntityRecord::new("Equal", &[0x2A75], true),
    EntityRecord::new("EqualTilde", &[0x2242], true),
    EntityRecord::new("Equilibrium", &[0x21CC], true),
    EntityRecord::new("Escr", &[0x2130], true),
    EntityRecord::new("Esim", &[0x2A73], true),
    EntityRecord::new("Eta", &[0x0397], true),
    EntityRecord::new("Euml", &[0x00CB], false),
    EntityRecord::new("Exists", &[0x2203], true),
    EntityRecord::new("ExponentialE", &[0x2147], true),
    EntityRecord::new("Fcy", &[0x0424], true),
    EntityRecord::new("Ffr", &[0x1D509], true),
    EntityRecord::new("FilledSmallSquare", &[0x25FC], true),
    EntityRecord::new("FilledVerySmallSquare", &[0x25AA], true),
    EntityRecord::new("Fopf", &[0x1D53D], true),
    EntityRecord::new("ForAll", &[0x2200], true),
    EntityRecord::new("Fouriertrf", &[0x2131], true),
    EntityRecord::new("Fscr", &[0x2131], true),
    EntityRecord::new("GJcy", &[0x0403], true),
    EntityRecord::new("GT", &[0x003E], false),
    EntityRecord::new("Gamma", &[0x0393], true),
    EntityRecord::new("Gammad", &[0x03DC], true),
    EntityRecord::new("Gbreve", &[0x011E], true),
    EntityRecord::new("Gcedil", &[0x0122], true),
    EntityRecord::new("Gcirc", &[0x011C], true),
    EntityRecord::new("Gcy", &[0x0413], true),
    EntityRecord::new("Gdot", &[0x0120], true),
    EntityRecord::new("Gfr", &[0x1D50A], true),
    EntityRecord::new("Gg", &[0x22D9], true),
    EntityRecord::new("Gopf", &[0x1D53E], true),
    EntityRecord::new("GreaterEqual", &[0x2265], true),
    EntityRecord::new("GreaterEqualLess", &[0x22DB], true),
    EntityRecord::new("GreaterFullEqual", &[0x2267], true),
    EntityRecord::new("GreaterGreater", &[0x2AA2], true),
    EntityRecord::new("GreaterLess", &[0x2277], true),
    EntityRecord::new("GreaterSlantEqual", &[0x2A7E], true),
    EntityRecord::new("GreaterTilde", &[0x2273], true),
    EntityRecord::new("Gscr", &[0x1D4A2], true),
    EntityRecord::new("Gt", &[0x226B], true),
    EntityRecord::new("HARDcy", &[0x042A], true),
    EntityRecord::new("Hacek", &[0x02C7], true),
    EntityRecord::new("Hat", &[0x005E], true),
    EntityRecord::new("Hcirc", &[0x0124], true),
    EntityRecord::new("Hfr", &[0x210C], true),
    EntityRecord::new("HilbertSpace", &[0x210B], true),
    EntityRecord::new("Hopf", &[0x210D], true),
    EntityRecord::new("HorizontalLine", &[0x2500], true),
    EntityRecord::new("Hscr", &[0x210B], true),
    EntityRecord::new("Hstrok", &[0x0126], true),
    EntityRecord::new("HumpDownHump", &[0x224E], true),
    EntityRecord::new("HumpEqual", &[0x224F], true),
    EntityRecord::new("IEcy", &[0x0415], true),
    EntityRecord::new("IJlig", &[0x0132], true),
    EntityRecord::new("IOcy", &[0x0401], true),
    EntityRecord::new("Iacute", &[0x00CD], false),
    EntityRecord::new("Icirc", &[0x00CE], false),
    EntityRecord::new("Icy", &[0x0418], true),
    EntityRecord::new("Idot", &[0x0130], true),
    EntityRecord::new("Ifr", &[0x2111], true),
    EntityRecord::new("Igrave", &[0x00CC], false),
    EntityRecord::new("Im", &[0x2111], true),
    EntityRecord::new("Imacr", &[0x012A], true),
    EntityRecord::new("ImaginaryI", &[0x2148], true),
    EntityRecord::new("Implies", &[0x21D2], true),
    EntityRecord::new("Int", &[0x222C], true),
    EntityRecord::new("Integral", &[0x222B], true),
    EntityRecord::new("Intersection", &[0x22C2], true),
    EntityRecord::new("InvisibleComma", &[0x2063], true),
    EntityRecord::new("InvisibleTimes", &[0x2062], true),
    EntityRecord::new("Iogon", &[0x012E], true),
    EntityRecord::new("Iopf", &[0x1D540], true),
    EntityRecord::new("Iota", &[0x0399], true),
    EntityRecord::new("Iscr", &[0x2110], true),
    EntityRecord::new("Itilde", &[0x0128], true),
    EntityRecord::new("Iukcy", &[0x0406], true),
    EntityRecord::new("Iuml", &[0x00CF], false),
    EntityRecord::new("Jcirc", &[0x0134], true),
    EntityRecord::new("Jcy", &[0x0419], true),
    EntityRecord::new("Jfr", &[0x1D50D], true),
    EntityRecord::new("Jopf", &[0x1D541], true),
    EntityRecord::new("Jscr", &[0x1D4A5], true),
    EntityRecord::new("Jsercy", &[0x0408], true),
    EntityRecord::new("Jukcy", &[0x0404], true),
    EntityRecord::new("KHcy", &[0x0425], true),
    EntityRecord::new("KJcy", &[0x040C], true),
    EntityRecord::new("Kappa", &[0x039A], true),
    EntityRecord::new("Kcedil", &[0x0136], true),
    EntityRecord::new("Kcy", &[0x041A], true),
    EntityRecord::new("Kfr", &[0x1D50E], true),
    EntityRecord::new("Kopf", &[0x1D542], true),
    EntityRecord::new("Kscr", &[0x1D4A6], true),
    EntityRecord::new("LJcy", &[0x0409], true),
    EntityRecord::new("LT", &[0x003C], false),
    EntityRecord::new("Lacute", &[0x0139], true),
    EntityRecord::new("Lambda", &[0x039B], true),
    EntityRecord::new("Lang", &[0x27EA], true),
    EntityRecord::new("Laplacetrf", &[0x2112], true),
    EntityRecord::new("Larr", &[0x219E], true),
    EntityRecord::new("Lcaron", &[0x013D], true),
    EntityRecord::new("Lcedil", &[0x013B], true),
    EntityRecord::new("Lcy", &[0x041B], true),
    EntityRecord::new("LeftAngleBracket", &[0x27E8], true),
    EntityRecord::new("LeftArrow", &[0x2190], true),
    EntityRecord::new("LeftArrowBar", &[0x21E4], true),
    EntityRecord::new("LeftArrowRightArrow", &[0x21C6], true),
    EntityRecord::new("LeftCeiling", &[0x2308], true),
    EntityRecord::new("LeftDoubleBracket", &[0x27E6], true),
    EntityRecord::new("LeftDownTeeVector", &[0x2961], true),
    EntityRecord::new("LeftDownVector", &[0x21C3], true),
    EntityRecord::new("LeftDownVectorBar", &[0x2959], true),
    EntityRecord::new("LeftFloor", &[0x230A], true),
    EntityRecord::new("LeftRightArrow", &[0x2194], true),
    EntityRecord::new("LeftRightVector", &[0x294E], true),
    EntityRecord::new("LeftTee", &[0x22A3], true),
    EntityRecord::new("LeftTeeArrow", &[0x21A4], true),
    EntityRecord::new("LeftTeeVector", &[0x295A], true),
    EntityRecord::new("LeftTriangle", &[0x22B2], true),
    EntityRecord::new("LeftTriangleBar", &[0x29CF], true),
    EntityRecord::new("LeftTriangleEqual", &[0x22B4], true),
    EntityRecord::new("LeftUpDownVector", &[0x2951], true),
    EntityRecord::new("LeftUpTeeVector", &[0x2960], true),
    EntityRecord::new("LeftUpVector", &[0x21BF], true),
    EntityRecord::new("LeftUpVectorBar", &[0x2958], true),
    EntityRecord::new("LeftVector", &[0x21BC], true),
    EntityRecord::new("LeftVectorBar", &[0x2952], true),
    EntityRecord::new("Leftarrow", &[0x21D0], true),
    EntityRecord::new("Leftrightarrow", &[0x21D4], true),
    EntityRecord::new("LessEqualGreater", &[0x22DA], true),
    EntityRecord::new("LessFullEqual", &[0x2266], true),
    EntityRecord::new("LessGreater", &[0x2276], true),
    EntityRecord::new("LessLess", &[0x2AA1], true),
    EntityRecord::new("LessSlantEqual", &[0x2A7D], true),
    EntityRecord::new("LessTilde", &[0x2272], true),
    EntityRecord::new("Lfr", &[0x1D50F], true),
    EntityRecord::new("Ll", &[0x22D8], true),
    EntityRecord::new("Lleftarrow", &[0x21DA], true),
    EntityRecord::new("Lmidot", &[0x013F], true),
    EntityRecord::new("LongLeftArrow", &[0x27F5], true),
    EntityRecord::new("LongLeftRightArrow", &[0x27F7], true),
    EntityRecord::new("LongRightArrow", &[0x27F6], true),
    EntityRecord::new("Longleftarrow", &[0x27F8], true),
    EntityRecord::new("Longleftrightarrow", &[0x27FA], true),
    EntityRecord::new("Longrightarrow", &[0x27F9], true),
    EntityRecord::new("Lopf", &[0x1D543], true),
    EntityRecord::new("LowerLeftArrow", &[0x2199], true),
    EntityRecord::new("LowerRightArrow", &[0x2198], true),
    EntityRecord::new("Lscr", &[0x2112], true),
    EntityRecord::new("Lsh", &[0x21B0], true),
    EntityRecord::new("Lstrok", &[0x0141], true),
    EntityRecord::new("Lt", &[0x226A], true),
    EntityRecord::new("Map", &[0x2905], true),
    EntityRecord::new("Mcy", &[0x041C], true),
    EntityRecord::new("MediumSpace", &[0x205F], true),
    EntityRecord::new("Mellintrf", &[0x2133], true),
    EntityRecord::new("Mfr", &[0x1D510], true),
    EntityRecord::new("MinusPlus", &[0x2213], true),
    EntityRecord::new("Mopf", &[0x1D544], true),
    EntityRecord::new("Mscr", &[0x2133], true),
    EntityRecord::new("Mu", &[0x039C], true),
    EntityRecord::new("NJcy", &[0x040A], true),
    EntityRecord::new("Nacute", &[0x0143], true),
    EntityRecord::new("Ncaron", &[0x0147], true),
    EntityRecord::new("Ncedil", &[0x0145], true),
    EntityRecord::new("Ncy", &[0x041D], true),
    EntityRecord::new("NegativeMediumSpace", &[0x200B], true),
    EntityRecord::new("NegativeThickSpace", &[0x200B], true),
    EntityRecord::new("NegativeThinSpace", &[0x200B], true),
    EntityRecord::new("NegativeVeryThinSpace", &[0x200B], true),
    EntityRecord::new("NestedGreaterGreater", &[0x226B], true),
    EntityRecord::new("NestedLessLess", &[0x226A], true),
    EntityRecord::new("NewLine", &[0x000A], true),
    EntityRecord::new("Nfr", &[0x1D511], true),
    EntityRecord::new("NoBreak", &[0x2060], true),
    EntityRecord::new("NonBreakingSpace", &[0x00A0], true),
    EntityRecord::new("Nopf", &[0x2115], true),
    EntityRecord::new("Not", &[0x2AEC], true),
    EntityRecord::new("NotCongruent", &[0x2262], true),
    EntityRecord::new("NotCupCap", &[0x226D], true),
    EntityRecord::new("NotDoubleVerticalBar", &[0x2226], true),
    EntityRecord::new("NotElement", &[0x2209], true),
    EntityRecord::new("NotEqual", &[0x2260], true),
    EntityRecord::new("NotEqualTilde", &[0x2242, 0x0338], true),
    EntityRecord::new("NotExists", &[0x2204], true),
    EntityRecord::new("NotGreater", &[0x226F], true),
    EntityRecord::new("NotGreaterEqual", &[0x2271], true),
    EntityRecord::new("NotGreaterFullEqual", &[0x2267, 0x0338], true),
    EntityRecord::new("NotGreaterGreater", &[0x226B, 0x0338], true),
    EntityRecord::new("NotGreaterLess", &[0x2279], true),
    EntityRecord::new("NotGreaterSlantEqual", &[0x2A7E, 0x0338], true),
    EntityRecord::new("NotGreaterTilde", &[0x2275], true),
    EntityRecord::new("NotHumpDownHump", &[0x224E, 0x0338], true),
    EntityRecord::new("NotHumpEqual", &[0x224F, 0x0338], true),
    EntityRecord::new("NotLeftTriangle", &[0x22EA], true),
    EntityRecord::new("NotLeftTriangleBar", &[0x29CF, 0x0338], true),
    EntityRecord::new("NotLeftTriangleEqual", &[0x22EC], true),
    EntityRecord::new("NotLess", &[0x226E], true),
    EntityRecord::new("NotLessEqual", &[0x2270], true),
    EntityRecord::new("NotLessGreater", &[0x2278], true),
    EntityRecord::new("NotLessLess", &[0x226A, 0x0338], true),
    EntityRecord::new("NotLessSlantEqual", &[0x2A7D, 0x0338], true),
    EntityRecord::new("NotLessTilde", &[0x2274], true),
    EntityRecord::new("NotNestedGreaterGreater", &[0x2AA2, 0x0338], true),
    EntityRecord::new("NotNestedLessLess", &[0x2AA1, 0x0338], true),
    EntityRecord::new("NotPrecedes", &[0x2280], true),
    EntityRecord::new("NotPrecedesEqual", &[0x2AAF, 0x0338], true),
    EntityRecord::new("NotPrecedesSlantEqual", &[0x22E0], true),
    EntityRecord::new("NotReverseElement", &[0x220C], true),
    EntityRecord::new("NotRightTriangle", &[0x22EB], true),
    EntityRecord::new("NotRightTriangleBar", &[0x29D0, 0x0338], true),
    EntityRecord::new("NotRightTriangleEqual", &[0x22ED], true),
    EntityRecord::new("NotSquareSubset", &[0x228F, 0x0338], true),
    EntityRecord::new("NotSquareSubsetEqual", &[0x22E2], true),
    EntityRecord::new("NotSquareSuperset", &[0x2290, 0x0338], true),
    EntityRecord::new("NotSquareSupersetEqual", &[0x22E3], true),
    EntityRecord::new("NotSubset", &[0x2282, 0x20D2], true),
    EntityRecord::new("NotSubsetEqual", &[0x2288], true),
    EntityRecord::new("NotSucceeds", &[0x2281], true),
    EntityRecord::new("NotSucceedsEqual", &[0x2AB0, 0x0338], true),
    EntityRecord::new("NotSucceedsSlantEqual", &[0x22E1], true),
    EntityRecord::new("NotSucceedsTilde", &[0x227F, 0x0338], true),
    EntityRecord::new("NotSuperset", &[0x2283, 0x20D2], true),
    EntityRecord::new("NotSupersetEqual", &[0x2289], true),
    EntityRecord::new("NotTilde", &[0x2241], true),
    EntityRecord::new("NotTildeEqual", &[0x2244], true),
    EntityRecord::new("NotTildeFullEqual", &[0x2247], true),
    EntityRecord::new("NotTildeTilde", &[0x2249], true),
    EntityRecord::new("NotVerticalBar", &[0x2224], true),
    EntityRecord::new("Nscr", &[0x1D4A9], true),
    EntityRecord::new("Ntilde", &[0x00D1], false),
    EntityRecord::new("Nu", &[0x039D], true),
    EntityRecord::new("OElig", &[0x0152], true),
    EntityRecord::new("Oacute", &[0x00D3], false),
    EntityRecord::new("Ocirc", &[0x00D4], false),
    EntityRecord::new("Ocy", &[0x041E], true),
    EntityRecord::new("Odblac", &[0x0150], true),
    EntityRecord::new("Ofr", &[0x1D512], true),
    EntityRecord::new("Ograve", &[0x00D2], false),
    EntityRecord::new("Omacr", &[0x014C], true),
    EntityRecord::new("Omega", &[0x03A9], true),
    EntityRecord::new("Omicron", &[0x039F], true),
    EntityRecord::new("Oopf", &[0x1D546], true),
    EntityRecord::new("OpenCurlyDoubleQuote", &[0x201C], true),
    EntityRecord::new("OpenCurlyQuote", &[0x2018], true),
    EntityRecord::new("Or", &[0x2A54], true),
    EntityRecord::new("Oscr", &[0x1D4AA], true),
    EntityRecord::new("Oslash", &[0x00D8], false),
    EntityRecord::new("Otilde", &[0x00D5], false),
    EntityRecord::new("Otimes", &[0x2A37], true),
    EntityRecord::new("Ouml", &[0x00D6], false),
    EntityRecord::new("OverBar", &[0x203E], true),
    EntityRecord::new("OverBrace", &[0x23DE], true),
    EntityRecord::new("OverBracket", &[0x23B4], true),
    EntityRecord::new("OverParenthesis", &[0x23DC], true),
    EntityRecord::new("PartialD", &[0x2202], true),
    EntityRecord::new("Pcy", &[0x041F], true),
    EntityRecord::new("Pfr", &[0x1D513], true),
    EntityRecord::new("Phi", &[0x03A6], true),
    EntityRecord::new("Pi", &[0x03A0], true),
    EntityRecord::new("PlusMinus", &[0x00B1], true),
    EntityRecord::new("Poincareplane", &[0x210C], true),
    EntityRecord::new("Popf", &[0x2119], true),
    EntityRecord::new("Pr", &[0x2ABB], true),
    EntityRecord::new("Precedes", &[0x227A], true),
    EntityRecord::new("PrecedesEqual", &[0x2AAF], true),
    EntityRecord::new("PrecedesSlantEqual", &[0x227C], true),
    EntityRecord::new("PrecedesTilde", &[0x227E], true),
    EntityRecord::new("Prime", &[0x2033], true),
    EntityRecord::new("Product", &[0x220F], true),
    EntityRecord::new("Proportion", &[0x2237], true),
    EntityRecord::new("Proportional", &[0x221D], true),
    EntityRecord::new("Pscr", &[0x1D4AB], true),
    EntityRecord::new("Psi", &[0x03A8], true),
    EntityRecord::new("QUOT", &[0x0022], false),
    EntityRecord::new("Qfr", &[0x1D514], true),
    EntityRecord::new("Qopf", &[0x211A], true),
    EntityRecord::new("Qscr", &[0x1D4AC], true),
    EntityRecord::new("RBarr", &[0x2910], true),
    EntityRecord::new("REG", &[0x00AE], false),
    EntityRecord::new("Racute", &[0x0154], true),
    EntityRecord::new("Rang", &[0x27EB], true),
    EntityRecord::new("Rarr", &[0x21A0], true),
    EntityRecord::new("Rarrtl", &[0x2916], true),
    EntityRecord::new("Rcaron", &[0x0158], true),
    EntityRecord::new("Rcedil", &[0x0156], true),
    EntityRecord::new("Rcy", &[0x0420], true),
    EntityRecord::new("Re", &[0x211C], true),
    EntityRecord::new("ReverseElement", &[0x220B], true),
    EntityRecord::new("ReverseEquilibrium", &[0x21CB], true),
    EntityRecord::new("ReverseUpEquilibrium", &[0x296F], true),
    EntityRecord::new("Rfr", &[0x211C], true),
    EntityRecord::new("Rho", &[0x03A1], true),
    EntityRecord::new("RightAngleBracket", &[0x27E9], true),
    EntityRecord::new("RightArrow", &[0x2192], true),
    EntityRecord::new("RightArrowBar", &[0x21E5], true),
    EntityRecord::new("RightArrowLeftArrow", &[0x21C4], true),
    EntityRecord::new("RightCeiling", &[0x2309], true),
    EntityRecord::new("RightDoubleBracket", &[0x27E7], true),
    EntityRecord::new("RightDownTeeVector", &[0x295D], true),
    EntityRecord::new("RightDownVector", &[0x21C2], true),
    EntityRecord::new("RightDownVectorBar", &[0x2955], true),
    EntityRecord::new("RightFloor", &[0x230B], true),
    EntityRecord::new("RightTee", &[0x22A2], true),
    EntityRecord::new("RightTeeArrow", &[0x21A6], true),
    EntityRecord::new("RightTeeVector", &[0x295B], true),
    EntityRecord::new("RightTriangle", &[0x22B3], true),
    EntityRecord::new("RightTriangleBar", &[0x29D0], true),
    EntityRecord::new("RightTriangleEqual", &[0x22B5], true),
    EntityRecord::new("RightUpDownVector", &[0x294F], true),
    EntityRecord::new("RightUpTeeVector", &[0x295C], true),
    EntityRecord::new("RightUpVector", &[0x21BE], true),
    EntityRecord::new("RightUpVectorBar", &[0x2954], true),
    EntityRecord::new("RightVector", &[0x21C0], true),
    EntityRecord::new("RightVectorBar", &[0x2953], true),
    EntityRecord::new("Rightarrow", &[0x21D2], true),
    EntityRecord::new("Ropf", &[0x211D], true),
    EntityRecord::new("RoundImplies", &[0x2970], true),
    EntityRecord::new("Rrightarrow", &[0x21DB], true),
    EntityRecord::new("Rscr", &[0x211B], true),
    EntityRecord::new("Rsh", &[0x21B1], true),
    EntityRecord::new("RuleDelayed", &[0x29F4], true),
    EntityRecord::new("SHCHcy", &[0x0429], true),
    EntityRecord::new("SHcy", &[0x0428], true),
    EntityRecord::new("SOFTcy", &[0x042C], true),
    EntityRecord::new("Sacute", &[0x015A], true),
    EntityRecord::new("Sc", &[0x2ABC], true),
    EntityRecord::new("Scaron", &[0x0160], true),
    EntityRecord::new("Scedil", &[0x015E], true),
    EntityRecord::new("Scirc", &[0x015C], true),
    EntityRecord::new("Scy", &[0x0421], true),
    EntityRecord::new("Sfr", &[0x1D516], true),
    EntityRecord::new("ShortDownArrow", &[0x2193], true),
    EntityRecord::new("ShortLeftArrow", &[0x2190], true),
    EntityRecord::new("ShortRightArrow", &[0x2192], true),
    EntityRecord::new("ShortUpArrow", &[0x2191], true),
    EntityRecord::new("Sigma", &[0x03A3], true),
    EntityRecord::new("SmallCircle", &[0x2218], true),
    EntityRecord::new("Sopf", &[0x1D54A], true),
    EntityRecord::new("Sqrt", &[0x221A], true),
    EntityRecord::new("Square", &[0x25A1], true),
    EntityRecord::new("SquareIntersection", &[0x2293], true),
    EntityRecord::new("SquareSubset", &[0x228F], true),
    EntityRecord::new("SquareSubsetEqual", &[0x2291], true),
    EntityRecord::new("SquareSuperset", &[0x2290], true),
    EntityRecord::new("SquareSupersetEqual", &[0x2292], true),
    EntityRecord::new("SquareUnion", &[0x2294], true),
    EntityRecord::new("Sscr", &[0x1D4AE], true),
    EntityRecord::new("Star", &[0x22C6], true),
    EntityRecord::new("Sub", &[0x22D0], true),
    EntityRecord::new("Subset", &[0x22D0], true),
    EntityRecord::new("SubsetEqual", &[0x2286], true),
    EntityRecord::new("Succeeds", &[0x227B], true),
    EntityRecord::new("SucceedsEqual", &[0x2AB0], true),
    EntityRecord::new("SucceedsSlantEqual", &[0x227D], true),
    EntityRecord::new("SucceedsTilde", &[0x227F], true),
    EntityRecord::new("SuchThat", &[0x220B], true),
    EntityRecord::new("Sum", &[0x2211], true),
    EntityRecord::new("Sup", &[0x22D1], true),
    EntityRecord::new("Superset", &[0x2283], true),
    EntityRecord::new("SupersetEqual", &[0x2287], true),
    EntityRecord::new("Supset", &[0x22D1], true),
    EntityRecord::new("THORN", &[0x00DE], false),
    EntityRecord::new("TRADE", &[0x2122], true),
    EntityRecord::new("TSHcy", &[0x040B], true),
    EntityRecord::new("TScy", &[0x0426], true),
    EntityRecord::new("Tab", &[0x0009], true),
    EntityRecord::new("Tau", &[0x03A4], true),
    EntityRecord::new("Tcaron", &[0x0164], true),
    EntityRecord::new("Tcedil", &[0x0162], true),
    EntityRecord::new("Tcy", &[0x0422], true),
    EntityRecord::new("Tfr", &[0x1D517], true),
    EntityRecord::new("Therefore", &[0x2234], true),
    EntityRecord::new("Theta", &[0x0398], true),
    EntityRecord::new("ThickSpace", &[0x205F, 0x200A], true),
    EntityRecord::new("ThinSpace", &[0x2009], true),
    EntityRecord::new("Tilde", &[0x223C], true),
    EntityRecord::new("TildeEqual", &[0x2243], true),
    EntityRecord::new("TildeFullEqual", &[0x2245], true),
    EntityRecord::new("TildeTilde", &[0x2248], true),
    EntityRecord::new("Topf", &[0x1D54B], true),
    EntityRecord::new("TripleDot", &[0x20DB], true),
    EntityRecord::new("Tscr", &[0x1D4AF], true),
    EntityRecord::new("Tstrok", &[0x0166], true),
    EntityRecord::new("Uacute", &[0x00DA], false),
    EntityRecord::new("Uarr", &[0x219F], true),
    EntityRecord::new("Uarrocir", &[0x2949], true),
    EntityRecord::new("Ubrcy", &[0x040E], true),
    EntityRecord::new("Ubreve", &[0x016C], true),
    EntityRecord::new("Ucirc", &[0x00DB], false),
    EntityRecord::new("Ucy", &[0x0423], true),
    EntityRecord::new("Udblac", &[0x0170], true),
    EntityRecord::new("Ufr", &[0x1D518], true),
    EntityRecord::new("Ugrave", &[0x00D9], false),
    EntityRecord::new("Umacr", &[0x016A], true),
    EntityRecord::new("UnderBar", &[0x005F], true),
    EntityRecord::new("UnderBrace", &[0x23DF], true),
    EntityRecord::new("UnderBracket", &[0x23B5], true),
    EntityRecord::new("UnderParenthesis", &[0x23DD], true),
    EntityRecord::new("Union", &[0x22C3], true),
    EntityRecord::new("UnionPlus", &[0x228E], true),
    EntityRecord::new("Uogon", &[0x0172], true),
    EntityRecord::new("Uopf", &[0x1D54C], true),
    EntityRecord::new("UpArrow", &[0x2191], true),
    EntityRecord::new("UpArrowBar", &[0x2912], true),
    EntityRecord::new("UpArrowDownArrow", &[0x21C5], true),
    EntityRecord::new("UpDownArrow", &[0x2195], true),
    EntityRecord::new("UpEquilibrium", &[0x296E], true),
    EntityRecord::new("UpTee", &[0x22A5], true),
    EntityRecord::new("UpTeeArrow", &[0x21A5], true),
    EntityRecord::new("Uparrow", &[0x21D1], true),
    EntityRecord::new("Updownarrow", &[0x21D5], true),
    EntityRecord::new("UpperLeftArrow", &[0x2196], true),
    EntityRecord::new("UpperRightArrow", &[0x2197], true),
    EntityRecord::new("Upsi", &[0x03D2], true),
    EntityRecord::new("Upsilon", &[0x03A5], true),
    EntityRecord::new("Uring", &[0x016E], true),
    EntityRecord::new("Uscr", &[0x1D4B0], true),
    EntityRecord::new("Utilde", &[0x0168], true),
    EntityRecord::new("Uuml", &[0x00DC], false),
    EntityRecord::new("VDash", &[0x22AB], true),
    EntityRecord::new("Vbar", &[0x2AEB], true),
    EntityRecord::new("Vcy", &[0x0412], true),
    EntityRecord::new("Vdash", &[0x22A9], true),
    EntityRecord::new("Vdashl", &[0x2AE6], true),
    EntityRecord::new("Vee", &[0x22C1], true),
    EntityRecord::new("Verbar", &[0x2016], true),
    EntityRecord::new("Vert", &[0x2016], true),
    EntityRecord::new("VerticalBar", &[0x2223], true),
    EntityRecord::new("VerticalLine", &[0x007C], true),
    EntityRecord::new("VerticalSeparator", &[0x2758], true),
    EntityRecord::new("VerticalTilde", &[0x2240], true),
    EntityRecord::new("VeryThinSpace", &[0x200A], true),
    EntityRecord::new("Vfr", &[0x1D519], true),
    EntityRecord::new("Vopf", &[0x1D54D], true),
    EntityRecord::new("Vscr", &[0x1D4B1], true),
    EntityRecord::new("Vvdash", &[0x22AA], true),
    EntityRecord::new("Wcirc", &[0x0174], true),
    EntityRecord::new("Wedge", &[0x22C0], true),
    EntityRecord::new("Wfr", &[0x1D51A], true),
    EntityRecord::new("Wopf", &[0x1D54E], true),
    EntityRecord::new("Wscr", &[0x1D4B2], true),
    EntityRecord::new("Xfr", &[0x1D51B], true),
    EntityRecord::new("Xi", &[0x039E], true),
    EntityRecord::new("Xopf", &[0x1D54F], true),
    EntityRecord::new("Xscr", &[0x1D4B3], true),
    EntityRecord::new("YAcy", &[0x042F], true),
    EntityRecord::new("YIcy", &[0x0407], true),
    EntityRecord::new("YUcy", &[0x042E], true),
    EntityRecord::new("Yacute", &[0x00DD], false),
    EntityRecord::new("Ycirc", &[0x0176], true),
    EntityRecord::new("Ycy", &[0x042B], true),
    EntityRecord::new("Yfr", &[0x1D51C], true),
    EntityRecord::new("Yopf", &[0x1D550], true),
    EntityRecord::new("Yscr", &[0x1D4B4], true),
    EntityRecord::new("Yuml", &[0x0178], true),
    EntityRecord::new("ZHcy", &[0x0416], true),
    EntityRecord::new("Zacute", &[0x0179], true),
    EntityRecord::new("Zcaron", &[0x017D], true),
    EntityRecord::new("Zcy", &[0x0417], true),
    EntityRecord::new("Zdot", &[0x017B], true),
    EntityRecord::new("ZeroWidthSpace", &[0x200B], true),
    EntityRecord::new("Zeta", &[0x0396], true),
    EntityRecord::new("Zfr", &[0x2128], true),
    EntityRecord::new("Zopf", &[0x2124], true),
    EntityRecord::new("Zscr", &[0x1D4B5], true),
    EntityRecord::new("aacute", &[0x00E1], false),
    EntityRecord::new("abreve", &[0x0103], true),
    EntityRecord::new("ac", &[0x223E], true),
    EntityRecord::new("acE", &[0x223E, 0x0333], true),
    EntityRecord::new("acd", &[0x223F], true),
    EntityRecord::new("acirc", &[0x00E2], false),
    EntityRecord::new("acute", &[0x00B4], false),
    EntityRecord::new("acy", &[0x0430], true),
    EntityRecord::new("aelig", &[0x00E6], false),
    EntityRecord::new("af", &[0x2061], true),
    EntityRecord::new("afr", &[0x1D51E], true),
    EntityRecord::new("agrave", &[0x00E0], false),
    EntityRecord::new("alefsym", &[0x2135], true),
    EntityRecord::new("aleph", &[0x2135], true),
    EntityRecord::new("alpha", &[0x03B1], true),
    EntityRecord::new("amacr", &[0x0101], true),
    EntityRecord::new("amalg", &[0x2A3F], true),
    EntityRecord::new("amp", &[0x0026], false),
    EntityRecord::new("and", &[0x2227], true),
    EntityRecord::new("andand", &[0x2A55], true),
    EntityRecord::new("andd", &[0x2A5C], true),
    EntityRecord::new("andslope", &[0x2A58], true),
    EntityRecord::new("andv", &[0x2A5A], true),
    EntityRecord::new("ang", &[0x2220], true),
    EntityRecord::new("ange", &[0x29A4], true),
    EntityRecord::new("angle", &[0x2220], true),
    EntityRecord::new("angmsd", &[0x2221], true),
    EntityRecord::new("angmsdaa", &[0x29A8], true),
    EntityRecord::new("angmsdab", &[0x29A9], true),
    EntityRecord::new("angmsdac", &[0x29AA], true),
    EntityRecord::new("angmsdad", &[0x29AB], true),
    EntityRecord::new("angmsdae", &[0x29AC], true),
    EntityRecord::new("angmsdaf", &[0x29AD], true),
    EntityRecord::new("angmsdag", &[0x29AE], true),
    EntityRecord::new("angmsdah", &[0x29AF], true),
    EntityRecord::new("angrt", &[0x221F], true),
    EntityRecord::new("angrtvb", &[0x22BE], true),
    EntityRecord::new("angrtvbd", &[0x299D], true),
    EntityRecord::new("angsph", &[0x2222], true),
    EntityRecord::new("angst", &[0x00C5], true),
    EntityRecord::new("angzarr", &[0x237C], true),
    EntityRecord::new("aogon", &[0x0105], true),
    EntityRecord::new("aopf", &[0x1D552], true),
    EntityRecord::new("ap", &[0x2248], true),
    EntityRecord::new("apE", &[0x2A70], true),
    EntityRecord::new("apacir", &[0x2A6F], true),
    EntityRecord::new("ape", &[0x224A], true),
    EntityRecord::new("apid", &[0x224B], true),
    EntityRecord::new("apos", &[0x0027], true),
    EntityRecord::new("approx", &[0x2248], true),
    EntityRecord::new("approxeq", &[0x224A], true),
    EntityRecord::new("aring", &[0x00E5], false),
    EntityRecord::new("ascr", &[0x1D4B6], true),
    EntityRecord::new("ast", &[0x002A], true),
    EntityRecord::new("asymp", &[0x2248], true),
    EntityRecord::new("asympeq", &[0x224D], true),
    EntityRecord::new("atilde", &[0x00E3], false),
    EntityRecord::new("auml", &[0x00E4], false),
    EntityRecord::new("awconint", &[0x2233], true),
    EntityRecord::new("awint", &[0x2A11], true),
    EntityRecord::new("bNot", &[0x2AED], true),
    EntityRecord::new("backcong", &[0x224C], true),
    EntityRecord::new("backepsilon", &[0x03F6], true),
    EntityRecord::new("backprime", &[0x2035], true),
    EntityRecord::new("backsim", &[0x223D], true),
    EntityRecord::new("backsimeq", &[0x22CD], true),
    EntityRecord::new("barvee", &[0x22BD], true),
    EntityRecord::new("barwed", &[0x2305], true),
    EntityRecord::new("barwedge", &[0x2305], true),
    EntityRecord::new("bbrk", &[0x23B5], true),
    EntityRecord::new("bbrktbrk", &[0x23B6], true),
    EntityRecord::new("bcong", &[0x224C], true),
    EntityRecord::new("bcy", &[0x0431], true),
    EntityRecord::new("bdquo", &[0x201E], true),
    EntityRecord::new("becaus", &[0x2235], true),
    EntityRecord::new("because", &[0x2235], true),
    EntityRecord::new("bemptyv", &[0x29B0], true),
    EntityRecord::new("bepsi", &[0x03F6], true),
    EntityRecord::new("bernou", &[0x212C], true),
    EntityRecord::new("beta", &[0x03B2], true),
    EntityRecord::new("beth", &[0x2136], true),
    EntityRecord::new("between", &[0x226C], true),
    EntityRecord::new("bfr", &[0x1D51F], true),
    EntityRecord::new("bigcap", &[0x22C2], true),
    EntityRecord::new("bigcirc", &[0x25EF], true),
    EntityRecord::new("bigcup", &[0x22C3], true),
    EntityRecord::new("bigodot", &[0x2A00], true),
    EntityRecord::new("bigoplus", &[0x2A01], true),
    EntityRecord::new("bigotimes", &[0x2A02], true),
    EntityRecord::new("bigsqcup", &[0x2A06], true),
    EntityRecord::new("bigstar", &[0x2605], true),
    EntityRecord::new("bigtriangledown", &[0x25BD], true),
    EntityRecord::new("bigtriangleup", &[0x25B3], true),
    EntityRecord::new("biguplus", &[0x2A04], true),
    EntityRecord::new("bigvee", &[0x22C1], true),
    EntityRecord::new("bigwedge", &[0x22C0], true),
    EntityRecord::new("bkarow", &[0x290D], true),
    EntityRecord::new("blacklozenge", &[0x29EB], true),
    EntityRecord::new("blacksquare", &[0x25AA], true),
    EntityRecord::new("blacktriangle", &[0x25B4], true),
    EntityRecord::new("blacktriangledown", &[0x25BE], true),
    EntityRecord::new("blacktriangleleft", &[0x25C2], true),
    EntityRecord::new("blacktriangleright", &[0x25B8], true),
    EntityRecord::new("blank", &[0x2423], true),
    EntityRecord::new("blk12", &[0x2592], true),
    EntityRecord::new("blk14", &[0x2591], true),
    EntityRecord::new("blk34", &[0x2593], true),
    EntityRecord::new("block", &[0x2588], true),
    EntityRecord::new("bne", &[0x003D, 0x20E5], true),
    EntityRecord::new("bnequiv", &[0x2261, 0x20E5], true),
    EntityRecord::new("bnot", &[0x2310], true),
    EntityRecord::new("bopf", &[0x1D553], true),
    EntityRecord::new("bot", &[0x22A5], true),
    EntityRecord::new("bottom", &[0x22A5], true),
    EntityRecord::new("bowtie", &[0x22C8], true),
    EntityRecord::new("boxDL", &[0x2557], true),
    EntityRecord::new("boxDR", &[0x2554], true),
    EntityRecord::new("boxDl", &[0x2556], true),
    EntityRecord::new("boxDr", &[0x2553], true),
    EntityRecord::new("boxH", &[0x2550], true),
    EntityRecord::new("boxHD", &[0x2566], true),
    EntityRecord::new("boxHU", &[0x2569], true),
    EntityRecord::new("boxHd", &[0x2564], true),
    EntityRecord::new("boxHu", &[0x2567], true),
    EntityRecord::new("boxUL", &[0x255D], true),
    EntityRecord::new("boxUR", &[0x255A], true),
    EntityRecord::new("boxUl", &[0x255C], true),
    EntityRecord::new("boxUr", &[0x2559], true),
    EntityRecord::new("boxV", &[0x2551], true),
    EntityRecord::new("boxVH", &[0x256C], true),
    EntityRecord::new("boxVL", &[0x2563], true),
    EntityRecord::new("boxVR", &[0x2560], true),
    EntityRecord::new("boxVh", &[0x256B], true),
    EntityRecord::new("boxVl", &[0x2562], true),
    EntityRecord::new("boxVr", &[0x255F], true),
    EntityRecord::new("boxbox", &[0x29C9], true),
    EntityRecord::new("boxdL", &[0x2555], true),
    EntityRecord::new("boxdR", &[0x2552], true),
    EntityRecord::new("boxdl", &[0x2510], true),
    EntityRecord::new("boxdr", &[0x250C], true),
    EntityRecord::new("boxh", &[0x2500], true),
    EntityRecord::new("boxhD", &[0x2565], true),
    EntityRecord::new("boxhU", &[0x2568], true),
    EntityRecord::new("boxhd", &[0x252C], true),
    EntityRecord::new("boxhu", &[0x2534], true),
    EntityRecord::new("boxminus", &[0x229F], true),
    EntityRecord::new("boxplus", &[0x229E], true),
    EntityRecord::new("boxtimes", &[0x22A0], true),
    EntityRecord::new("boxuL", &[0x255B], true),
    EntityRecord::new("boxuR", &[0x2558], true),
    EntityRecord::new("boxul", &[0x2518], true),
    EntityRecord::new("boxur", &[0x2514], true),
    EntityRecord::new("boxv", &[0x2502], true),
    EntityRecord::new("boxvH", &[0x256A], true),
    EntityRecord::new("boxvL", &[0x2561], true),
    EntityRecord::new("boxvR", &[0x255E], true),
    EntityRecord::new("boxvh", &[0x253C], true),
    EntityRecord::new("boxvl", &[0x2524], true),
    EntityRecord::new("boxvr", &[0x251C], true),
    EntityRecord::new("bprime", &[0x2035], true),
    EntityRecord::new("breve", &[0x02D8], true),
    EntityRecord::new("brvbar", &[0x00A6], false),
    EntityRecord::new("bscr", &[0x1D4B7], true),
    EntityRecord::new("bsemi", &[0x204F], true),
    EntityRecord::new("bsim", &[0x223D], true),
    EntityRecord::new("bsime", &[0x22CD], true),
    EntityRecord::new("bsol", &[0x005C], true),
    EntityRecord::new("bsolb", &[0x29C5], true),
    EntityRecord::new("bsolhsub", &[0x27C8], true),
    EntityRecord::new("bull", &[0x2022], true),
    EntityRecord::new("bullet", &[0x2022], true),
    EntityRecord::new("bump", &[0x224E], true),
    EntityRecord::new("bumpE", &[0x2AAE], true),
    EntityRecord::new("bumpe", &[0x224F], true),
    EntityRecord::new("bumpeq", &[0x224F], true),
    EntityRecord::new("cacute", &[0x0107], true),
    EntityRecord::new("cap", &[0x2229], true),
    EntityRecord::new("capand", &[0x2A44], true),
    EntityRecord::new("capbrcup", &[0x2A49], true),
    EntityRecord::new("capcap", &[0x2A4B], true),
    EntityRecord::new("capcup", &[0x2A47], true),
    EntityRecord::new("capdot", &[0x2A40], true),
    EntityRecord::new("caps", &[0x2229, 0xFE00], true),
    EntityRecord::new("caret", &[0x2041], true),
    EntityRecord::new("caron", &[0x02C7], true),
    EntityRecord::new("ccaps", &[0x2A4D], true),
    EntityRecord::new("ccaron", &[0x010D], true),
    EntityRecord::new("ccedil", &[0x00E7], false),
    EntityRecord::new("ccirc", &[0x0109], true),
    EntityRecord::new("ccups", &[0x2A4C], true),
    EntityRecord::new("ccupssm", &[0x2A50], true),
    EntityRecord::new("cdot", &[0x010B], true),
    EntityRecord::new("cedil", &[0x00B8], false),
    EntityRecord::new("cemptyv", &[0x29B2], true),
    EntityRecord::new("cent", &[0x00A2], false),
    EntityRecord::new("centerdot", &[0x00B7], true),
    EntityRecord::new("cfr", &[0x1D520], true),
    EntityRecord::new("chcy", &[0x0447], true),
    EntityRecord::new("check", &[0x2713], true),
    EntityRecord::new("checkmark", &[0x2713], true),
    EntityRecord::new("chi", &[0x03C7], true),
    EntityRecord::new("cir", &[0x25CB], true),
    EntityRecord::new("cirE", &[0x29C3], true),
    EntityRecord::new("circ", &[0x02C6], true),
    EntityRecord::new("circeq", &[0x2257], true),
    EntityRecord::new("circlearrowleft", &[0x21BA], true),
    EntityRecord::new("circlearrowright", &[0x21BB], true),
    EntityRecord::new("circledR", &[0x00AE], true),
    EntityRecord::new("circledS", &[0x24C8], true),
    EntityRecord::new("circledast", &[0x229B], true),
    EntityRecord::new("circledcirc", &[0x229A], true),
    EntityRecord::new("circleddash", &[0x229D], true),
    EntityRecord::new("cire", &[0x2257], true),
    EntityRecord::new("cirfnint", &[0x2A10], true),
    EntityRecord::new("cirmid", &[0x2AEF], true),
    EntityRecord::new("cirscir", &[0x29C2], true),
    EntityRecord::new("clubs", &[0x2663], true),
    EntityRecord::new("clubsuit", &[0x2663], true),
    EntityRecord::new("colon", &[0x003A], true),
    EntityRecord::new("colone", &[0x2254], true),
    EntityRecord::new("coloneq", &[0x2254], true),
    EntityRecord::new("comma", &[0x002C], true),
    EntityRecord::new("commat", &[0x0040], true),
    EntityRecord::new("comp", &[0x2201], true),
    EntityRecord::new("compfn", &[0x2218], true),
    EntityRecord::new("complement", &[0x2201], true),
    EntityRecord::new("complexes", &[0x2102], true),
    EntityRecord::new("cong", &[0x2245], true),
    EntityRecord::new("congdot", &[0x2A6D], true),
    EntityRecord::new("conint", &[0x222E], true),
    EntityRecord::new("copf", &[0x1D554], true),
    EntityRecord::new("coprod", &[0x2210], true),
    EntityRecord::new("copy", &[0x00A9], false),
    EntityRecord::new("copysr", &[0x2117], true),
    EntityRecord::new("crarr", &[0x21B5], true),
    EntityRecord::new("cross", &[0x2717], true),
    EntityRecord::new("cscr", &[0x1D4B8], true),
    EntityRecord::new("csub", &[0x2ACF], true),
    EntityRecord::new("csube", &[0x2AD1], true),
    EntityRecord::new("csup", &[0x2AD0], true),
    EntityRecord::new("csupe", &[0x2AD2], true),
    EntityRecord::new("ctdot", &[0x22EF], true),
    EntityRecord::new("cudarrl", &[0x2938], true),
    EntityRecord::new("cudarrr", &[0x2935], true),
    EntityRecord::new("cuepr", &[0x22DE], true),
    EntityRecord::new("cuesc", &[0x22DF], true),
    EntityRecord::new("cularr", &[0x21B6], true),
    EntityRecord::new("cularrp", &[0x293D], true),
    EntityRecord::new("cup", &[0x222A], true),
    EntityRecord::new("cupbrcap", &[0x2A48], true),
    EntityRecord::new("cupcap", &[0x2A46], true),
    EntityRecord::new("cupcup", &[0x2A4A], true),
    EntityRecord::new("cupdot", &[0x228D], true),
    EntityRecord::new("cupor", &[0x2A45], true),
    EntityRecord::new("cups", &[0x222A, 0xFE00], true),
    EntityRecord::new("curarr", &[0x21B7], true),
    EntityRecord::new("curarrm", &[0x293C], true),
    EntityRecord::new("curlyeqprec", &[0x22DE], true),
    EntityRecord::new("curlyeqsucc", &[0x22DF], true),
    EntityRecord::new("curlyvee", &[0x22CE], true),
    EntityRecord::new("curlywedge", &[0x22CF], true),
    EntityRecord::new("curren", &[0x00A4], false),
    EntityRecord::new("curvearrowleft", &[0x21B6], true),
    EntityRecord::new("curvearrowright", &[0x21B7], true),
    EntityRecord::new("cuvee", &[0x22CE], true),
    EntityRecord::new("cuwed", &[0x22CF], true),
    EntityRecord::new("cwconint", &[0x2232], true),
    EntityRecord::new("cwint", &[0x2231], true),
    EntityRecord::new("cylcty", &[0x232D], true),
    EntityRecord::new("dArr", &[0x21D3], true),
    EntityRecord::new("dHar", &[0x2965], true),
    EntityRecord::new("dagger", &[0x2020], true),
    EntityRecord::new("daleth", &[0x2138], true),
    EntityRecord::new("darr", &[0x2193], true),
    EntityRecord::new("dash", &[0x2010], true),
    EntityRecord::new("dashv", &[0x22A3], true),
    EntityRecord::new("dbkarow", &[0x290F], true),
    EntityRecord::new("dblac", &[0x02DD], true),
    EntityRecord::new("dcaron", &[0x010F], true),
    EntityRecord::new("dcy", &[0x0434], true),
    EntityRecord::new("dd", &[0x2146], true),
    EntityRecord::new("ddagger", &[0x2021], true),
    EntityRecord::new("ddarr", &[0x21CA], true),
    EntityRecord::new("ddotseq", &[0x2A77], true),
    EntityRecord::new("deg", &[0x00B0], false),
    EntityRecord::new("delta", &[0x03B4], true),
    EntityRecord::new("demptyv", &[0x29B1], true),
    EntityRecord::new("dfisht", &[0x297F], true),
    EntityRecord::new("dfr", &[0x1D521], true),
    EntityRecord::new("dharl", &[0x21C3], true),
    EntityRecord::new("dharr", &[0x21C2], true),
    EntityRecord::new("diam", &[0x22C4], true),
    EntityRecord::new("diamond", &[0x22C4], true),
    EntityRecord::new("diamondsuit", &[0x2666], true),
    EntityRecord::new("diams", &[0x2666], true),
    EntityRecord::new("die", &[0x00A8], true),
    EntityRecord::new("digamma", &[0x03DD], true),
    EntityRecord::new("disin", &[0x22F2], true),
    EntityRecord::new("div", &[0x00F7], true),
    EntityRecord::new("divide", &[0x00F7], false),
    EntityRecord::new("divideontimes", &[0x22C7], true),
    EntityRecord::new("divonx", &[0x22C7], true),
    EntityRecord::new("djcy", &[0x0452], true),
    EntityRecord::new("dlcorn", &[0x231E], true),
    EntityRecord::new("dlcrop", &[0x230D], true),
    EntityRecord::new("dollar", &[0x0024], true),
    EntityRecord::new("dopf", &[0x1D555], true),
    EntityRecord::new("dot", &[0x02D9], true),
    EntityRecord::new("doteq", &[0x2250], true),
    EntityRecord::new("doteqdot", &[0x2251], true),
    EntityRecord::new("dotminus", &[0x2238], true),
    EntityRecord::new("dotplus", &[0x2214], true),
    EntityRecord::new("dotsquare", &[0x22A1], true),
    EntityRecord::new("doublebarwedge", &[0x2306], true),
    EntityRecord::new("downarrow", &[0x2193], true),
    EntityRecord::new("downdownarrows", &[0x21CA], true),
    EntityRecord::new("downharpoonleft", &[0x21C3], true),
    EntityRecord::new("downharpoonright", &[0x21C2], true),
    EntityRecord::new("drbkarow", &[0x2910], true),
    EntityRecord::new("drcorn", &[0x231F], true),
    EntityRecord::new("drcrop", &[0x230C], true),
    EntityRecord::new("dscr", &[0x1D4B9], true),
    EntityRecord::new("dscy", &[0x0455], true),
    EntityRecord::new("dsol", &[0x29F6], true),
    EntityRecord::new("dstrok", &[0x0111], true),
    EntityRecord::new("dtdot", &[0x22F1], true),
    EntityRecord::new("dtri", &[0x25BF], true),
    EntityRecord::new("dtrif", &[0x25BE], true),
    EntityRecord::new("duarr", &[0x21F5], true),
    EntityRecord::new("duhar", &[0x296F], true),
    EntityRecord::new("dwangle", &[0x29A6], true),
    EntityRecord::new("dzcy", &[0x045F], true),
    EntityRecord::new("dzigrarr", &[0x27FF], true),
    EntityRecord::new("eDDot", &[0x2A77], true),
    EntityRecord::new("eDot", &[0x2251], true),
    EntityRecord::new("eacute", &[0x00E9], false),
    EntityRecord::new("easter", &[0x2A6E], true),
    EntityRecord::new("ecaron", &[0x011B], true),
    EntityRecord::new("ecir", &[0x2256], true),
    EntityRecord::new("ecirc", &[0x00EA], false),
    EntityRecord::new("ecolon", &[0x2255], true),
    EntityRecord::new("ecy", &[0x044D], true),
    EntityRecord::new("edot", &[0x0117], true),
    EntityRecord::new("ee", &[0x2147], true),
    EntityRecord::new("efDot", &[0x2252], true),
    EntityRecord::new("efr", &[0x1D522], true),
    EntityRecord::new("eg", &[0x2A9A], true),
    EntityRecord::new("egrave", &[0x00E8], false),
    EntityRecord::new("egs", &[0x2A96], true),
    EntityRecord::new("egsdot", &[0x2A98], true),
    EntityRecord::new("el", &[0x2A99], true),
    EntityRecord::new("elinters", &[0x23E7], true),
    EntityRecord::new("ell", &[0x2113], true),
    EntityRecord::new("els", &[0x2A95], true),
    EntityRecord::new("elsdot", &[0x2A97], true),
    EntityRecord::new("emacr", &[0x0113], true),
    EntityRecord::new("empty", &[0x2205], true),
    EntityRecord::new("emptyset", &[0x2205], true),
    EntityRecord::new("emptyv", &[0x2205], true),
    EntityRecord::new("emsp", &[0x2003], true),
    EntityRecord::new("emsp13", &[0x2004], true),
    EntityRecord::new("emsp14", &[0x2005], true),
    EntityRecord::new("eng", &[0x014B], true),
    EntityRecord::new("ensp", &[0x2002], true),
    EntityRecord::new("eogon", &[0x0119], true),
    EntityRecord::new("eopf", &[0x1D556], true),
    EntityRecord::new("epar", &[0x22D5], true),
    EntityRecord::new("eparsl", &[0x29E3], true),
    EntityRecord::new("eplus", &[0x2A71], true),
    EntityRecord::new("epsi", &[0x03B5], true),
    EntityRecord::new("epsilon", &[0x03B5], true),
    EntityRecord::new("epsiv", &[0x03F5], true),
    EntityRecord::new("eqcirc", &[0x2256], true),
    EntityRecord::new("eqcolon", &[0x2255], true),
    EntityRecord::new("eqsim", &[0x2242], true),
    EntityRecord::new("eqslantgtr", &[0x2A96], true),
    EntityRecord::new("eqslantless", &[0x2A95], true),
    EntityRecord::new("equals", &[0x003D], true),
    EntityRecord::new("equest", &[0x225F], true),
    EntityRecord::new("equiv", &[0x2261], true),
    EntityRecord::new("equivDD", &[0x2A78], true),
    EntityRecord::new("eqvparsl", &[0x29E5], true),
    EntityRecord::new("erDot", &[0x2253], true),
    EntityRecord::new("erarr", &[0x2971], true),
    EntityRecord::new("escr", &[0x212F], true),
    EntityRecord::new("esdot", &[0x2250], true),
    EntityRecord::new("esim", &[0x2242], true),
    EntityRecord::new("eta", &[0x03B7], true),
    EntityRecord::new("eth", &[0x00F0], false),
    EntityRecord::new("euml", &[0x00EB], false),
    EntityRecord::new("euro", &[0x20AC], true),
    EntityRecord::new("excl", &[0x0021], true),
    EntityRecord::new("exist", &[0x2203], true),
    EntityRecord::new("expectation", &[0x2130], true),
    EntityRecord::new("exponentiale", &[0x2147], true),
    EntityRecord::new("fallingdotseq", &[0x2252], true),
    EntityRecord::new("fcy", &[0x0444], true),
    EntityRecord::new("female", &[0x2640], true),
    EntityRecord::new("ffilig", &[0xFB03], true),
    EntityRecord::new("fflig", &[0xFB00], true),
    EntityRecord::new("ffllig", &[0xFB04], true),
    EntityRecord::new("ffr", &[0x1D523], true),
    EntityRecord::new("filig", &[0xFB01], true),
    EntityRecord::new("fjlig", &[0x0066, 0x006A], true),
    EntityRecord::new("flat", &[0x266D], true),
    EntityRecord::new("fllig", &[0xFB02], true),
    EntityRecord::new("fltns", &[0x25B1], true),
    EntityRecord::new("fnof", &[0x0192], true),
    EntityRecord::new("fopf", &[0x1D557], true),
    EntityRecord::new("forall", &[0x2200], true),
    EntityRecord::new("fork", &[0x22D4], true),
    EntityRecord::new("forkv", &[0x2AD9], true),
    EntityRecord::new("fpartint", &[0x2A0D], true),
    EntityRecord::new("frac12", &[0x00BD], false),
    EntityRecord::new("frac13", &[0x2153], true),
    EntityRecord::new("frac14", &[0x00BC], false),
    EntityRecord::new("frac15", &[0x2155], true),
    EntityRecord::new("frac16", &[0x2159], true),
    EntityRecord::new("frac18", &[0x215B], true),
    EntityRecord::new("frac23", &[0x2154], true),
    EntityRecord::new("frac25", &[0x2156], true),
    EntityRecord::new("frac34", &[0x00BE], false),
    EntityRecord::new("frac35", &[0x2157], true),
    EntityRecord::new("frac38", &[0x215C], true),
    EntityRecord::new("frac45", &[0x2158], true),
    EntityRecord::new("frac56", &[0x215A], true),
    EntityRecord::new("frac58", &[0x215D], true),
    EntityRecord::new("frac78", &[0x215E], true),
    EntityRecord::new("frasl", &[0x2044], true),
    EntityRecord::new("frown", &[0x2322], true),
    EntityRecord::new("fscr", &[0x1D4BB], true),
    EntityRecord::new("gE", &[0x2267], true),
    EntityRecord::new("gEl", &[0x2A8C], true),
    EntityRecord::new("gacute", &[0x01F5], true),
    EntityRecord::new("gamma", &[0x03B3], true),
    EntityRecord::new("gammad", &[0x03DD], true),
    EntityRecord::new("gap", &[0x2A86], true),
    EntityRecord::new("gbreve", &[0x011F], true),
    EntityRecord::new("gcirc", &[0x011D], true),
    EntityRecord::new("gcy", &[0x0433], true),
    EntityRecord::new("gdot", &[0x0121], true),
    EntityRecord::new("ge", &[0x2265], true),
    EntityRecord::new("gel", &[0x22DB], true),
    EntityRecord::new("geq", &[0x2265], true),
    EntityRecord::new("geqq", &[0x2267], true),
    EntityRecord::new("geqslant", &[0x2A7E], true),
    EntityRecord::new("ges", &[0x2A7E], true),
    EntityRecord::new("gescc", &[0x2AA9], true),
    EntityRecord::new("gesdot", &[0x2A80], true),
    EntityRecord::new("gesdoto", &[0x2A82], true),
    EntityRecord::new("gesdotol", &[0x2A84], true),
    EntityRecord::new("gesl", &[0x22DB, 0xFE00], true),
    EntityRecord::new("gesles", &[0x2A94], true),
    EntityRecord::new("gfr", &[0x1D524], true),
    EntityRecord::new("gg", &[0x226B], true),
    EntityRecord::new("ggg", &[0x22D9], true),
    EntityRecord::new("gimel", &[0x2137], true),
    EntityRecord::new("gjcy", &[0x0453], true),
    EntityRecord::new("gl", &[0x2277], true),
    EntityRecord::new("glE", &[0x2A92], true),
    EntityRecord::new("gla", &[0x2AA5], true),
    EntityRecord::new("glj", &[0x2AA4], true),
    EntityRecord::new("gnE", &[0x2269], true),
    EntityRecord::new("gnap", &[0x2A8A], true),
    EntityRecord::new("gnapprox", &[0x2A8A], true),
    EntityRecord::new("gne", &[0x2A88], true),
    EntityRecord::new("gneq", &[0x2A88], true),
    EntityRecord::new("gneqq", &[0x2269], true),
    EntityRecord::new("gnsim", &[0x22E7], true),
    EntityRecord::new("gopf", &[0x1D558], true),
    EntityRecord::new("grave", &[0x0060], true),
    EntityRecord::new("gscr", &[0x210A], true),
    EntityRecord::new("gsim", &[0x2273], true),
    EntityRecord::new("gsime", &[0x2A8E], true),
    EntityRecord::new("gsiml", &[0x2A90], true),
    EntityRecord::new("gt", &[0x003E], false),
    EntityRecord::new("gtcc", &[0x2AA7], true),
    EntityRecord::new("gtcir", &[0x2A7A], true),
    EntityRecord::new("gtdot", &[0x22D7], true),
    EntityRecord::new("gtlPar", &[0x2995], true),
    EntityRecord::new("gtquest", &[0x2A7C], true),
    EntityRecord::new("gtrapprox", &[0x2A86], true),
    EntityRecord::new("gtrarr", &[0x2978], true),
    EntityRecord::new("gtrdot", &[0x22D7], true),
    EntityRecord::new("gtreqless", &[0x22DB], true),
    EntityRecord::new("gtreqqless", &[0x2A8C], true),
    EntityRecord::new("gtrless", &[0x2277], true),
    EntityRecord::new("gtrsim", &[0x2273], true),
    EntityRecord::new("gvertneqq", &[0x2269, 0xFE00], true),
    EntityRecord::new("gvnE", &[0x2269, 0xFE00], true),
    EntityRecord::new("hArr", &[0x21D4], true),
    EntityRecord::new("hairsp", &[0x200A], true),
    EntityRecord::new("half", &[0x00BD], true),
    EntityRecord::new("hamilt", &[0x210B], true),
    EntityRecord::new("hardcy", &[0x044A], true),
    EntityRecord::new("harr", &[0x2194], true),
    EntityRecord::new("harrcir", &[0x2948], true),
    EntityRecord::new("harrw", &[0x21AD], true),
    EntityRecord::new("hbar", &[0x210F], true),
    EntityRecord::new("hcirc", &[0x0125], true),
    EntityRecord::new("hearts", &[0x2665], true),
    EntityRecord::new("heartsuit", &[0x2665], true),
    EntityRecord::new("hellip", &[0x2026], true),
    EntityRecord::new("hercon", &[0x22B9], true),
    EntityRecord::new("hfr", &[0x1D525], true),
    EntityRecord::new("hksearow", &[0x2925], true),
    EntityRecord::new("hkswarow", &[0x2926], true),
    EntityRecord::new("hoarr", &[0x21FF], true),
    EntityRecord::new("homtht", &[0x223B], true),
    EntityRecord::new("hookleftarrow", &[0x21A9], true),
    EntityRecord::new("hookrightarrow", &[0x21AA], true),
    EntityRecord::new("hopf", &[0x1D559], true),
    EntityRecord::new("horbar", &[0x2015], true),
    EntityRecord::new("hscr", &[0x1D4BD], true),
    EntityRecord::new("hslash", &[0x210F], true),
    EntityRecord::new("hstrok", &[0x0127], true),
    EntityRecord::new("hybull", &[0x2043], true),
    EntityRecord::new("hyphen", &[0x2010], true),
    EntityRecord::new("iacute", &[0x00ED], false),
    EntityRecord::new("ic", &[0x2063], true),
    EntityRecord::new("icirc", &[0x00EE], false),
    EntityRecord::new("icy", &[0x0438], true),
    EntityRecord::new("iecy", &[0x0435], true),
    EntityRecord::new("iexcl", &[0x00A1], false),
    EntityRecord::new("iff", &[0x21D4], true),
    EntityRecord::new("ifr", &[0x1D526], true),
    EntityRecord::new("igrave", &[0x00EC], false),
    EntityRecord::new("ii", &[0x2148], true),
    EntityRecord::new("iiiint", &[0x2A0C], true),
    EntityRecord::new("iiint", &[0x222D], true),
    EntityRecord::new("iinfin", &[0x29DC], true),
    EntityRecord::new("iiota", &[0x2129], true),
    EntityRecord::new("ijlig", &[0x0133], true),
    EntityRecord::new("imacr", &[0x012B], true),
    EntityRecord::new("image", &[0x2111], true),
    EntityRecord::new("imagline", &[0x2110], true),
    EntityRecord::new("imagpart", &[0x2111], true),
    EntityRecord::new("imath", &[0x0131], true),
    EntityRecord::new("imof", &[0x22B7], true),
    EntityRecord::new("imped", &[0x01B5], true),
    EntityRecord::new("in", &[0x2208], true),
    EntityRecord::new("incare", &[0x2105], true),
    EntityRecord::new("infin", &[0x221E], true),
    EntityRecord::new("infintie", &[0x29DD], true),
    EntityRecord::new("inodot", &[0x0131], true),
    EntityRecord::new("int", &[0x222B], true),
    EntityRecord::new("intcal", &[0x22BA], true),
    EntityRecord::new("integers", &[0x2124], true),
    EntityRecord::new("intercal", &[0x22BA], true),
    EntityRecord::new("intlarhk", &[0x2A17], true),
    EntityRecord::new("intprod", &[0x2A3C], true),
    EntityRecord::new("iocy", &[0x0451], true),
    EntityRecord::new("iogon", &[0x012F], true),
    EntityRecord::new("iopf", &[0x1D55A], true),
    EntityRecord::new("iota", &[0x03B9], true),
    EntityRecord::new("iprod", &[0x2A3C], true),
    EntityRecord::new("iquest", &[0x00BF], false),
    EntityRecord::new("iscr", &[0x1D4BE], true),
    EntityRecord::new("isin", &[0x2208], true),
    EntityRecord::new("isinE", &[0x22F9], true),
    EntityRecord::new("isindot", &[0x22F5], true),
    EntityRecord::new("isins", &[0x22F4], true),
    EntityRecord::new("isinsv", &[0x22F3], true),
    EntityRecord::new("isinv", &[0x2208], true),
    EntityRecord::new("it", &[0x2062], true),
    EntityRecord::new("itilde", &[0x0129], true),
    EntityRecord::new("iukcy", &[0x0456], true),
    EntityRecord::new("iuml", &[0x00EF], false),
    EntityRecord::new("jcirc", &[0x0135], true),
    EntityRecord::new("jcy", &[0x0439], true),
    EntityRecord::new("jfr", &[0x1D527], true),
    EntityRecord::new("jmath", &[0x0237], true),
    EntityRecord::new("jopf", &[0x1D55B], true),
    EntityRecord::new("jscr", &[0x1D4BF], true),
    EntityRecord::new("jsercy", &[0x0458], true),
    EntityRecord::new("jukcy", &[0x0454], true),
    EntityRecord::new("kappa", &[0x03BA], true),
    EntityRecord::new("kappav", &[0x03F0], true),
    EntityRecord::new("kcedil", &[0x0137], true),
    EntityRecord::new("kcy", &[0x043A], true),
    EntityRecord::new("kfr", &[0x1D528], true),
    EntityRecord::new("kgreen", &[0x0138], true),
    EntityRecord::new("khcy", &[0x0445], true),
    EntityRecord::new("kjcy", &[0x045C], true),
    EntityRecord::new("kopf", &[0x1D55C], true),
    EntityRecord::new("kscr", &[0x1D4C0], true),
    EntityRecord::new("lAarr", &[0x21DA], true),
    EntityRecord::new("lArr", &[0x21D0], true),
    EntityRecord::new("lAtail", &[0x291B], true),
    EntityRecord::new("lBarr", &[0x290E], true),
    EntityRecord::new("lE", &[0x2266], true),
    EntityRecord::new("lEg", &[0x2A8B], true),
    EntityRecord::new("lHar", &[0x2962], true),
    EntityRecord::new("lacute", &[0x013A], true),
    EntityRecord::new("laemptyv", &[0x29B4], true),
    EntityRecord::new("lagran", &[0x2112], true),
    EntityRecord::new("lambda", &[0x03BB], true),
    EntityRecord::new("lang", &[0x27E8], true),
    EntityRecord::new("langd", &[0x2991], true),
    EntityRecord::new("langle", &[0x27E8], true),
    EntityRecord::new("lap", &[0x2A85], true),
    EntityRecord::new("laquo", &[0x00AB], false),
    EntityRecord::new("larr", &[0x2190], true),
    EntityRecord::new("larrb", &[0x21E4], true),
    EntityRecord::new("larrbfs", &[0x291F], true),
    EntityRecord::new("larrfs", &[0x291D], true),
    EntityRecord::new("larrhk", &[0x21A9], true),
    EntityRecord::new("larrlp", &[0x21AB], true),
    EntityRecord::new("larrpl", &[0x2939], true),
    EntityRecord::new("larrsim", &[0x2973], true),
    EntityRecord::new("larrtl", &[0x21A2], true),
    EntityRecord::new("lat", &[0x2AAB], true),
    EntityRecord::new("latail", &[0x2919], true),
    EntityRecord::new("late", &[0x2AAD], true),
    EntityRecord::new("lates", &[0x2AAD, 0xFE00], true),
    EntityRecord::new("lbarr", &[0x290C], true),
    EntityRecord::new("lbbrk", &[0x2772], true),
    EntityRecord::new("lbrace", &[0x007B], true),
    EntityRecord::new("lbrack", &[0x005B], true),
    EntityRecord::new("lbrke", &[0x298B], true),
    EntityRecord::new("lbrksld", &[0x298F], true),
    EntityRecord::new("lbrkslu", &[0x298D], true),
    EntityRecord::new("lcaron", &[0x013E], true),
    EntityRecord::new("lcedil", &[0x013C], true),
    EntityRecord::new("lceil", &[0x2308], true),
    EntityRecord::new("lcub", &[0x007B], true),
    EntityRecord::new("lcy", &[0x043B], true),
    EntityRecord::new("ldca", &[0x2936], true),
    EntityRecord::new("ldquo", &[0x201C], true),
    EntityRecord::new("ldquor", &[0x201E], true),
    EntityRecord::new("ldrdhar", &[0x2967], true),
    EntityRecord::new("ldrushar", &[0x294B], true),
    EntityRecord::new("ldsh", &[0x21B2], true),
    EntityRecord::new("le", &[0x2264], true),
    EntityRecord::new("leftarrow", &[0x2190], true),
    EntityRecord::new("leftarrowtail", &[0x21A2], true),
    EntityRecord::new("leftharpoondown", &[0x21BD], true),
    EntityRecord::new("leftharpoonup", &[0x21BC], true),
    EntityRecord::new("leftleftarrows", &[0x21C7], true),
    EntityRecord::new("leftrightarrow", &[0x2194], true),
    EntityRecord::new("leftrightarrows", &[0x21C6], true),
    EntityRecord::new("leftrightharpoons", &[0x21CB], true),
    EntityRecord::new("leftrightsquigarrow", &[0x21AD], true),
    EntityRecord::new("leftthreetimes", &[0x22CB], true),
    EntityRecord::new("leg", &[0x22DA], true),
    EntityRecord::new("leq", &[0x2264], true),
    EntityRecord::new("leqq", &[0x2266], true),
    EntityRecord::new("leqslant", &[0x2A7D], true),
    EntityRecord::new("les", &[0x2A7D], true),
    EntityRecord::new("lescc", &[0x2AA8], true),
    EntityRecord::new("lesdot", &[0x2A7F], true),
    EntityRecord::new("lesdoto", &[0x2A81], true),
    EntityRecord::new("lesdotor", &[0x2A83], true),
    EntityRecord::new("lesg", &[0x22DA, 0xFE00], true),
    EntityRecord::new("lesges", &[0x2A93], true),
    EntityRecord::new("lessapprox", &[0x2A85], true),
    EntityRecord::new("lessdot", &[0x22D6], true),
    EntityRecord::new("lesseqgtr", &[0x22DA], true),
    EntityRecord::new("lesseqqgtr", &[0x2A8B], true),
    EntityRecord::new("lessgtr", &[0x2276], true),
    EntityRecord::new("lesssim", &[0x2272], true),
    EntityRecord::new("lfisht", &[0x297C], true),
    EntityRecord::new("lfloor", &[0x230A], true),
    EntityRecord::new("lfr", &[0x1D529], true),
    EntityRecord::new("lg", &[0x2276], true),
    EntityRecord::new("lgE", &[0x2A91], true),
    EntityRecord::new("lhard", &[0x21BD], true),
    EntityRecord::new("lharu", &[0x21BC], true),
    EntityRecord::new("lharul", &[0x296A], true),
    EntityRecord::new("lhblk", &[0x2584], true),
    EntityRecord::new("ljcy", &[0x0459], true),
    EntityRecord::new("ll", &[0x226A], true),
    EntityRecord::new("llarr", &[0x21C7], true),
    EntityRecord::new("llcorner", &[0x231E], true),
    EntityRecord::new("llhard", &[0x296B], true),
    EntityRecord::new("lltri", &[0x25FA], true),
    EntityRecord::new("lmidot", &[0x0140], true),
    EntityRecord::new("lmoust", &[0x23B0], true),
    EntityRecord::new("lmoustache", &[0x23B0], true),
    EntityRecord::new("lnE", &[0x2268], true),
    EntityRecord::new("lnap", &[0x2A89], true),
    EntityRecord::new("lnapprox", &[0x2A89], true),
    EntityRecord::new("lne", &[0x2A87], true),
    EntityRecord::new("lneq", &[0x2A87], true),
    EntityRecord::new("lneqq", &[0x2268], true),
    EntityRecord::new("lnsim", &[0x22E6], true),
    EntityRecord::new("loang", &[0x27EC], true),
    EntityRecord::new("loarr", &[0x21FD], true),
    EntityRecord::new("lobrk", &[0x27E6], true),
    EntityRecord::new("longleftarrow", &[0x27F5], true),
    EntityRecord::new("longleftrightarrow", &[0x27F7], true),
    EntityRecord::new("longmapsto", &[0x27FC], true),
    EntityRecord::new("longrightarrow", &[0x27F6], true),
    EntityRecord::new("looparrowleft", &[0x21AB], true),
    EntityRecord::new("looparrowright", &[0x21AC], true),
    EntityRecord::new("lopar", &[0x2985], true),
    EntityRecord::new("lopf", &[0x1D55D], true),
    EntityRecord::new("loplus", &[0x2A2D], true),
    EntityRecord::new("lotimes", &[0x2A34], true),
    EntityRecord::new("lowast", &[0x2217], true),
    EntityRecord::new("lowbar", &[0x005F], true),
    EntityRecord::new("loz", &[0x25CA], true),
    EntityRecord::new("lozenge", &[0x25CA], true),
    EntityRecord::new("lozf", &[0x29EB], true),
    EntityRecord::new("lpar", &[0x0028], true),
    EntityRecord::new("lparlt", &[0x2993], true),
    EntityRecord::new("lrarr", &[0x21C6], true),
    EntityRecord::new("lrcorner", &[0x231F], true),
    EntityRecord::new("lrhar", &[0x21CB], true),
    EntityRecord::new("lrhard", &[0x296D], true),
    EntityRecord::new("lrm", &[0x200E], true),
    EntityRecord::new("lrtri", &[0x22BF], true),
    EntityRecord::new("lsaquo", &[0x2039], true),
    EntityRecord::new("lscr", &[0x1D4C1], true),
    EntityRecord::new("lsh", &[0x21B0], true),
    EntityRecord::new("lsim", &[0x2272], true),
    EntityRecord::new("lsime", &[0x2A8D], true),
    EntityRecord::new("lsimg", &[0x2A8F], true),
    EntityRecord::new("lsqb", &[0x005B], true),
    EntityRecord::new("lsquo", &[0x2018], true),
    EntityRecord::new("lsquor", &[0x201A], true),
    EntityRecord::new("lstrok", &[0x0142], true),
    EntityRecord::new("lt", &[0x003C], false),
    EntityRecord::new("ltcc", &[0x2AA6], true),
    EntityRecord::new("ltcir", &[0x2A79], true),
    EntityRecord::new("ltdot", &[0x22D6], true),
    EntityRecord::new("lthree", &[0x22CB], true),
    EntityRecord::new("ltimes", &[0x22C9], true),
    EntityRecord::new("ltlarr", &[0x2976], true),
    EntityRecord::new("ltquest", &[0x2A7B], true),
    EntityRecord::new("ltrPar", &[0x2996], true),
    EntityRecord::new("ltri", &[0x25C3], true),
    EntityRecord::new("ltrie", &[0x22B4], true),
    EntityRecord::new("ltrif", &[0x25C2], true),
    EntityRecord::new("lurdshar", &[0x294A], true),
    EntityRecord::new("luruhar", &[0x2966], true),
    EntityRecord::new("lvertneqq", &[0x2268, 0xFE00], true),
    EntityRecord::new("lvnE", &[0x2268, 0xFE00], true),
    EntityRecord::new("mDDot", &[0x223A], true),
    EntityRecord::new("macr", &[0x00AF], false),
    EntityRecord::new("male", &[0x2642], true),
    EntityRecord::new("malt", &[0x2720], true),
    EntityRecord::new("maltese", &[0x2720], true),
    EntityRecord::new("map", &[0x21A6], true),
    EntityRecord::new("mapsto", &[0x21A6], true),
    EntityRecord::new("mapstodown", &[0x21A7], true),
    EntityRecord::new("mapstoleft", &[0x21A4], true),
    EntityRecord::new("mapstoup", &[0x21A5], true),
    EntityRecord::new("marker", &[0x25AE], true),
    EntityRecord::new("mcomma", &[0x2A29], true),
    EntityRecord::new("mcy", &[0x043C], true),
    EntityRecord::new("mdash", &[0x2014], true),
    EntityRecord::new("measuredangle", &[0x2221], true),
    EntityRecord::new("mfr", &[0x1D52A], true),
    EntityRecord::new("mho", &[0x2127], true),
    EntityRecord::new("micro", &[0x00B5], false),
    EntityRecord::new("mid", &[0x2223], true),
    EntityRecord::new("midast", &[0x002A], true),
    EntityRecord::new("midcir", &[0x2AF0], true),
    EntityRecord::new("middot", &[0x00B7], false),
    EntityRecord::new("minus", &[0x2212], true),
    EntityRecord::new("minusb", &[0x229F], true),
    EntityRecord::new("minusd", &[0x2238], true),
    EntityRecord::new("minusdu", &[0x2A2A], true),
    EntityRecord::new("mlcp", &[0x2ADB], true),
    EntityRecord::new("mldr", &[0x2026], true),
    EntityRecord::new("mnplus", &[0x2213], true),
    EntityRecord::new("models", &[0x22A7], true),
    EntityRecord::new("mopf", &[0x1D55E], true),
    EntityRecord::new("mp", &[0x2213], true),
    EntityRecord::new("mscr", &[0x1D4C2], true),
    EntityRecord::new("mstpos", &[0x223E], true),
    EntityRecord::new("mu", &[0x03BC], true),
    EntityRecord::new("multimap", &[0x22B8], true),
    EntityRecord::new("mumap", &[0x22B8], true),
    EntityRecord::new("nGg", &[0x22D9, 0x0338], true),
    EntityRecord::new("nGt", &[0x226B, 0x20D2], true),
    EntityRecord::new("nGtv", &[0x226B, 0x0338], true),
    EntityRecord::new("nLeftarrow", &[0x21CD], true),
    EntityRecord::new("nLeftrightarrow", &[0x21CE], true),
    EntityRecord::new("nLl", &[0x22D8, 0x0338], true),
    EntityRecord::new("nLt", &[0x226A, 0x20D2], true),
    EntityRecord::new("nLtv", &[0x226A, 0x0338], true),
    EntityRecord::new("nRightarrow", &[0x21CF], true),
    EntityRecord::new("nVDash", &[0x22AF], true),
    EntityRecord::new("nVdash", &[0x22AE], true),
    EntityRecord::new("nabla", &[0x2207], true),
    EntityRecord::new("nacute", &[0x0144], true),
    EntityRecord::new("nang", &[0x2220, 0x20D2], true),
    EntityRecord::new("nap", &[0x2249], true),
    EntityRecord::new("napE", &[0x2A70, 0x0338], true),
    EntityRecord::new("napid", &[0x224B, 0x0338], true),
    EntityRecord::new("napos", &[0x0149], true),
    EntityRecord::new("napprox", &[0x2249], true),
    EntityRecord::new("natur", &[0x266E], true),
    EntityRecord::new("natural", &[0x266E], true),
    EntityRecord::new("naturals", &[0x2115], true),
    EntityRecord::new("nbsp", &[0x00A0], false),
    EntityRecord::new("nbump", &[0x224E, 0x0338], true),
    EntityRecord::new("nbumpe", &[0x224F, 0x0338], true),
    EntityRecord::new("ncap", &[0x2A43], true),
    EntityRecord::new("ncaron", &[0x0148], true),
    EntityRecord::new("ncedil", &[0x0146], true),
    EntityRecord::new("ncong", &[0x2247], true),
    EntityRecord::new("ncongdot", &[0x2A6D, 0x0338], true),
    EntityRecord::new("ncup", &[0x2A42], true),
    EntityRecord::new("ncy", &[0x043D], true),
    EntityRecord::new("ndash", &[0x2013], true),
    EntityRecord::new("ne", &[0x2260], true),
    EntityRecord::new("neArr", &[0x21D7], true),
    EntityRecord::new("nearhk", &[0x2924], true),
    EntityRecord::new("nearr", &[0x2197], true),
    EntityRecord::new("nearrow", &[0x2197], true),
    EntityRecord::new("nedot", &[0x2250, 0x0338], true),
    EntityRecord::new("nequiv", &[0x2262], true),
    EntityRecord::new("nesear", &[0x2928], true),
    EntityRecord::new("nesim", &[0x2242, 0x0338], true),
    EntityRecord::new("nexist", &[0x2204], true),
    EntityRecord::new("nexists", &[0x2204], true),
    EntityRecord::new("nfr", &[0x1D52B], true),
    EntityRecord::new("ngE", &[0x2267, 0x0338], true),
    EntityRecord::new("nge", &[0x2271], true),
    EntityRecord::new("ngeq", &[0x2271], true),
    EntityRecord::new("ngeqq", &[0x2267, 0x0338], true),
    EntityRecord::new("ngeqslant", &[0x2A7E, 0x0338], true),
    EntityRecord::new("nges", &[0x2A7E, 0x0338], true),
    EntityRecord::new("ngsim", &[0x2275], true),
    EntityRecord::new("ngt", &[0x226F], true),
    EntityRecord::new("ngtr", &[0x226F], true),
    EntityRecord::new("nhArr", &[0x21CE], true),
    EntityRecord::new("nharr", &[0x21AE], true),
    EntityRecord::new("nhpar", &[0x2AF2], true),
    EntityRecord::new("ni", &[0x220B], true),
    EntityRecord::new("nis", &[0x22FC], true),
    EntityRecord::new("nisd", &[0x22FA], true),
    EntityRecord::new("niv", &[0x220B], true),
    EntityRecord::new("njcy", &[0x045A], true),
    EntityRecord::new("nlArr", &[0x21CD], true),
    EntityRecord::new("nlE", &[0x2266, 0x0338], true),
    EntityRecord::new("nlarr", &[0x219A], true),
    EntityRecord::new("nldr", &[0x2025], true),
    EntityRecord::new("nle", &[0x2270], true),
    EntityRecord::new("nleftarrow", &[0x219A], true),
    EntityRecord::new("nleftrightarrow", &[0x21AE], true),
    EntityRecord::new("nleq", &[0x2270], true),
    EntityRecord::new("nleqq", &[0x2266, 0x0338], true),
    EntityRecord::new("nleqslant", &[0x2A7D, 0x0338], true),
    EntityRecord::new("nles", &[0x2A7D, 0x0338], true),
    EntityRecord::new("nless", &[0x226E], true),
    EntityRecord::new("nlsim", &[0x2274], true),
    EntityRecord::new("nlt", &[0x226E], true),
    EntityRecord::new("nltri", &[0x22EA], true),
    EntityRecord::new("nltrie", &[0x22EC], true),
    EntityRecord::new("nmid", &[0x2224], true),
    EntityRecord::new("nopf", &[0x1D55F], true),
    EntityRecord::new("not", &[0x00AC], false),
    EntityRecord::new("notin", &[0x2209], true),
    EntityRecord::new("notinE", &[0x22F9, 0x0338], true),
    EntityRecord::new("notindot", &[0x22F5, 0x0338], true),
    EntityRecord::new("notinva", &[0x2209], true),
    EntityRecord::new("notinvb", &[0x22F7], true),
    EntityRecord::new("notinvc", &[0x22F6], true),
    EntityRecord::new("notni", &[0x220C], true),
    EntityRecord::new("notniva", &[0x220C], true),
    EntityRecord::new("notnivb", &[0x22FE], true),
    EntityRecord::new("notnivc", &[0x22FD], true),
    EntityRecord::new("npar", &[0x2226], true),
    EntityRecord::new("nparallel", &[0x2226], true),
    EntityRecord::new("nparsl", &[0x2AFD, 0x20E5], true),
    EntityRecord::new("npart", &[0x2202, 0x0338], true),
    EntityRecord::new("npolint", &[0x2A14], true),
    EntityRecord::new("npr", &[0x2280], true),
    EntityRecord::new("nprcue", &[0x22E0], true),
    EntityRecord::new("npre", &[0x2AAF, 0x0338], true),
    EntityRecord::new("nprec", &[0x2280], true),
    EntityRecord::new("npreceq", &[0x2AAF, 0x0338], true),
    EntityRecord::new("nrArr", &[0x21CF], true),
    EntityRecord::new("nrarr", &[0x219B], true),
    EntityRecord::new("nrarrc", &[0x2933, 0x0338], true),
    EntityRecord::new("nrarrw", &[0x219D, 0x0338], true),
    EntityRecord::new("nrightarrow", &[0x219B], true),
    EntityRecord::new("nrtri", &[0x22EB], true),
    EntityRecord::new("nrtrie", &[0x22ED], true),
    EntityRecord::new("nsc", &[0x2281], true),
    EntityRecord::new("nsccue", &[0x22E1], true),
    EntityRecord::new("nsce", &[0x2AB0, 0x0338], true),
    EntityRecord::new("nscr", &[0x1D4C3], true),
    EntityRecord::new("nshortmid", &[0x2224], true),
    EntityRecord::new("nshortparallel", &[0x2226], true),
    EntityRecord::new("nsim", &[0x2241], true),
    EntityRecord::new("nsime", &[0x2244], true),
    EntityRecord::new("nsimeq", &[0x2244], true),
    EntityRecord::new("nsmid", &[0x2224], true),
    EntityRecord::new("nspar", &[0x2226], true),
    EntityRecord::new("nsqsube", &[0x22E2], true),
    EntityRecord::new("nsqsupe", &[0x22E3], true),
    EntityRecord::new("nsub", &[0x2284], true),
    EntityRecord::new("nsubE", &[0x2AC5, 0x0338], true),
    EntityRecord::new("nsube", &[0x2288], true),
    EntityRecord::new("nsubset", &[0x2282, 0x20D2], true),
    EntityRecord::new("nsubseteq", &[0x2288], true),
    EntityRecord::new("nsubseteqq", &[0x2AC5, 0x0338], true),
    EntityRecord::new("nsucc", &[0x2281], true),
    EntityRecord::new("nsucceq", &[0x2AB0, 0x0338], true),
    EntityRecord::new("nsup", &[0x2285], true),
    EntityRecord::new("nsupE", &[0x2AC6, 0x0338], true),
    EntityRecord::new("nsupe", &[0x2289], true),
    EntityRecord::new("nsupset", &[0x2283, 0x20D2], true),
    EntityRecord::new("nsupseteq", &[0x2289], true),
    EntityRecord::new("nsupseteqq", &[0x2AC6, 0x0338], true),
    EntityRecord::new("ntgl", &[0x2279], true),
    EntityRecord::new("ntilde", &[0x00F1], false),
    EntityRecord::new("ntlg", &[0x2278], true),
    EntityRecord::new("ntriangleleft", &[0x22EA], true),
    EntityRecord::new("ntrianglelefteq", &[0x22EC], true),
    EntityRecord::new("ntriangleright", &[0x22EB], true),
    EntityRecord::new("ntrianglerighteq", &[0x22ED], true),
    EntityRecord::new("nu", &[0x03BD], true),
    EntityRecord::new("num", &[0x0023], true),
    EntityRecord::new("numero", &[0x2116], true),
    EntityRecord::new("numsp", &[0x2007], true),
    EntityRecord::new("nvDash", &[0x22AD], true),
    EntityRecord::new("nvHarr", &[0x2904], true),
    EntityRecord::new("nvap", &[0x224D, 0x20D2], true),
    EntityRecord::new("nvdash", &[0x22AC], true),
    EntityRecord::new("nvge", &[0x2265, 0x20D2], true),
    EntityRecord::new("nvgt", &[0x003E, 0x20D2], true),
    EntityRecord::new("nvinfin", &[0x29DE], true),
    EntityRecord::new("nvlArr", &[0x2902], true),
    EntityRecord::new("nvle", &[0x2264, 0x20D2], true),
    EntityRecord::new("nvlt", &[0x003C, 0x20D2], true),
    EntityRecord::new("nvltrie", &[0x22B4, 0x20D2], true),
    EntityRecord::new("nvrArr", &[0x2903], true),
    EntityRecord::new("nvrtrie", &[0x22B5, 0x20D2], true),
    EntityRecord::new("nvsim", &[0x223C, 0x20D2], true),
    EntityRecord::new("nwArr", &[0x21D6], true),
    EntityRecord::new("nwarhk", &[0x2923], true),
    EntityRecord::new("nwarr", &[0x2196], true),
    EntityRecord::new("nwarrow", &[0x2196], true),
    EntityRecord::new("nwnear", &[0x2927], true),
    EntityRecord::new("oS", &[0x24C8], true),
    EntityRecord::new("oacute", &[0x00F3], false),
    EntityRecord::new("oast", &[0x229B], true),
    EntityRecord::new("ocir", &[0x229A], true),
    EntityRecord::new("ocirc", &[0x00F4], false),
    EntityRecord::new("ocy", &[0x043E], true),
    EntityRecord::new("odash", &[0x229D], true),
    EntityRecord::new("odblac", &[0x0151], true),
    EntityRecord::new("odiv", &[0x2A38], true),
    EntityRecord::new("odot", &[0x2299], true),
    EntityRecord::new("odsold", &[0x29BC], true),
    EntityRecord::new("oelig", &[0x0153], true),
    EntityRecord::new("ofcir", &[0x29BF], true),
    EntityRecord::new("ofr", &[0x1D52C], true),
    EntityRecord::new("ogon", &[0x02DB], true),
    EntityRecord::new("ograve", &[0x00F2], false),
    EntityRecord::new("ogt", &[0x29C1], true),
    EntityRecord::new("ohbar", &[0x29B5], true),
    EntityRecord::new("ohm", &[0x03A9], true),
    EntityRecord::new("oint", &[0x222E], true),
    EntityRecord::new("olarr", &[0x21BA], true),
    EntityRecord::new("olcir", &[0x29BE], true),
    EntityRecord::new("olcross", &[0x29BB], true),
    EntityRecord::new("oline", &[0x203E], true),
    EntityRecord::new("olt", &[0x29C0], true),
    EntityRecord::new("omacr", &[0x014D], true),
    EntityRecord::new("omega", &[0x03C9], true),
    EntityRecord::new("omicron", &[0x03BF], true),
    EntityRecord::new("omid", &[0x29B6], true),
    EntityRecord::new("ominus", &[0x2296], true),
    EntityRecord::new("oopf", &[0x1D560], true),
    EntityRecord::new("opar", &[0x29B7], true),
    EntityRecord::new("operp", &[0x29B9], true),
    EntityRecord::new("oplus", &[0x2295], true),
    EntityRecord::new("or", &[0x2228], true),
    EntityRecord::new("orarr", &[0x21BB], true),
    EntityRecord::new("ord", &[0x2A5D], true),
    EntityRecord::new("order", &[0x2134], true),
    EntityRecord::new("orderof", &[0x2134], true),
    EntityRecord::new("ordf", &[0x00AA], false),
    EntityRecord::new("ordm", &[0x00BA], false),
    EntityRecord::new("origof", &[0x22B6], true),
    EntityRecord::new("oror", &[0x2A56], true),
    EntityRecord::new("orslope", &[0x2A57], true),
    EntityRecord::new("orv", &[0x2A5B], true),
    EntityRecord::new("oscr", &[0x2134], true),
    EntityRecord::new("oslash", &[0x00F8], false),
    EntityRecord::new("osol", &[0x2298], true),
    EntityRecord::new("otilde", &[0x00F5], false),
    EntityRecord::new("otimes", &[0x2297], true),
    EntityRecord::new("otimesas", &[0x2A36], true),
    EntityRecord::new("ouml", &[0x00F6], false),
    EntityRecord::new("ovbar", &[0x233D], true),
    EntityRecord::new("par", &[0x2225], true),
    EntityRecord::new("para", &[0x00B6], false),
    EntityRecord::new("parallel", &[0x2225], true),
    EntityRecord::new("parsim", &[0x2AF3], true),
    EntityRecord::new("parsl", &[0x2AFD], true),
    EntityRecord::new("part", &[0x2202], true),
    EntityRecord::new("pcy", &[0x043F], true),
    EntityRecord::new("percnt", &[0x0025], true),
    EntityRecord::new("period", &[0x002E], true),
    EntityRecord::new("permil", &[0x2030], true),
    EntityRecord::new("perp", &[0x22A5], true),
    EntityRecord::new("pertenk", &[0x2031], true),
    EntityRecord::new("pfr", &[0x1D52D], true),
    EntityRecord::new("phi", &[0x03C6], true),
    EntityRecord::new("phiv", &[0x03D5], true),
    EntityRecord::new("phmmat", &[0x2133], true),
    EntityRecord::new("phone", &[0x260E], true),
    EntityRecord::new("pi", &[0x03C0], true),
    EntityRecord::new("pitchfork", &[0x22D4], true),
    EntityRecord::new("piv", &[0x03D6], true),
    EntityRecord::new("planck", &[0x210F], true),
    EntityRecord::new("planckh", &[0x210E], true),
    EntityRecord::new("plankv", &[0x210F], true),
    EntityRecord::new("plus", &[0x002B], true),
    EntityRecord::new("plusacir", &[0x2A23], true),
    EntityRecord::new("plusb", &[0x229E], true),
    EntityRecord::new("pluscir", &[0x2A22], true),
    EntityRecord::new("plusdo", &[0x2214], true),
    EntityRecord::new("plusdu", &[0x2A25], true),
    EntityRecord::new("pluse", &[0x2A72], true),
    EntityRecord::new("plusmn", &[0x00B1], false),
    EntityRecord::new("plussim", &[0x2A26], true),
    EntityRecord::new("plustwo", &[0x2A27], true),
    EntityRecord::new("pm", &[0x00B1], true),
    EntityRecord::new("pointint", &[0x2A15], true),
    EntityRecord::new("popf", &[0x1D561], true),
    EntityRecord::new("pound", &[0x00A3], false),
    EntityRecord::new("pr", &[0x227A], true),
    EntityRecord::new("prE", &[0x2AB3], true),
    EntityRecord::new("prap", &[0x2AB7], true),
    EntityRecord::new("prcue", &[0x227C], true),
    EntityRecord::new("pre", &[0x2AAF], true),
    EntityRecord::new("prec", &[0x227A], true),
    EntityRecord::new("precapprox", &[0x2AB7], true),
    EntityRecord::new("preccurlyeq", &[0x227C], true),
    EntityRecord::new("preceq", &[0x2AAF], true),
    EntityRecord::new("precnapprox", &[0x2AB9], true),
    EntityRecord::new("precneqq", &[0x2AB5], true),
    EntityRecord::new("precnsim", &[0x22E8], true),
    EntityRecord::new("precsim", &[0x227E], true),
    EntityRecord::new("prime", &[0x2032], true),
    EntityRecord::new("primes", &[0x2119], true),
    EntityRecord::new("prnE", &[0x2AB5], true),
    EntityRecord::new("prnap", &[0x2AB9], true),
    EntityRecord::new("prnsim", &[0x22E8], true),
    EntityRecord::new("prod", &[0x220F], true),
    EntityRecord::new("profalar", &[0x232E], true),
    EntityRecord::new("profline", &[0x2312], true),
    EntityRecord::new("profsurf", &[0x2313], true),
    EntityRecord::new("prop", &[0x221D], true),
    EntityRecord::new("propto", &[0x221D], true),
    EntityRecord::new("prsim", &[0x227E], true),
    EntityRecord::new("prurel", &[0x22B0], true),
    EntityRecord::new("pscr", &[0x1D4C5], true),
    EntityRecord::new("psi", &[0x03C8], true),
    EntityRecord::new("puncsp", &[0x2008], true),
    EntityRecord::new("qfr", &[0x1D52E], true),
    EntityRecord::new("qint", &[0x2A0C], true),
    EntityRecord::new("qopf", &[0x1D562], true),
    EntityRecord::new("qprime", &[0x2057], true),
    EntityRecord::new("qscr", &[0x1D4C6], true),
    EntityRecord::new("quaternions", &[0x210D], true),
    EntityRecord::new("quatint", &[0x2A16], true),
    EntityRecord::new("quest", &[0x003F], true),
    EntityRecord::new("questeq", &[0x225F], true),
    EntityRecord::new("quot", &[0x0022], false),
    EntityRecord::new("rAarr", &[0x21DB], true),
    EntityRecord::new("rArr", &[0x21D2], true),
    EntityRecord::new("rAtail", &[0x291C], true),
    EntityRecord::new("rBarr", &[0x290F], true),
    EntityRecord::new("rHar", &[0x2964], true),
    EntityRecord::new("race", &[0x223D, 0x0331], true),
    EntityRecord::new("racute", &[0x0155], true),
    EntityRecord::new("radic", &[0x221A], true),
    EntityRecord::new("raemptyv", &[0x29B3], true),
    EntityRecord::new("rang", &[0x27E9], true),
    EntityRecord::new("rangd", &[0x2992], true),
    EntityRecord::new("range", &[0x29A5], true),
    EntityRecord::new("rangle", &[0x27E9], true),
    EntityRecord::new("raquo", &[0x00BB], false),
    EntityRecord::new("rarr", &[0x2192], true),
    EntityRecord::new("rarrap", &[0x2975], true),
    EntityRecord::new("rarrb", &[0x21E5], true),
    EntityRecord::new("rarrbfs", &[0x2920], true),
    EntityRecord::new("rarrc", &[0x2933], true),
    EntityRecord::new("rarrfs", &[0x291E], true),
    EntityRecord::new("rarrhk", &[0x21AA], true),
    EntityRecord::new("rarrlp", &[0x21AC], true),
    EntityRecord::new("rarrpl", &[0x2945], true),
    EntityRecord::new("rarrsim", &[0x2974], true),
    EntityRecord::new("rarrtl", &[0x21A3], true),
    EntityRecord::new("rarrw", &[0x219D], true),
    EntityRecord::new("ratail", &[0x291A], true),
    EntityRecord::new("ratio", &[0x2236], true),
    EntityRecord::new("rationals", &[0x211A], true),
    EntityRecord::new("rbarr", &[0x290D], true),
    EntityRecord::new("rbbrk", &[0x2773], true),
    EntityRecord::new("rbrace", &[0x007D], true),
    EntityRecord::new("rbrack", &[0x005D], true),
    EntityRecord::new("rbrke", &[0x298C], true),
    EntityRecord::new("rbrksld", &[0x298E], true),
    EntityRecord::new("rbrkslu", &[0x2990], true),
    EntityRecord::new("rcaron", &[0x0159], true),
    EntityRecord::new("rcedil", &[0x0157], true),
    EntityRecord::new("rceil", &[0x2309], true),
    EntityRecord::new("rcub", &[0x007D], true),
    EntityRecord::new("rcy", &[0x0440], true),
    EntityRecord::new("rdca", &[0x2937], true),
    EntityRecord::new("rdldhar", &[0x2969], true),
    EntityRecord::new("rdquo", &[0x201D], true),
    EntityRecord::new("rdquor", &[0x201D], true),
    EntityRecord::new("rdsh", &[0x21B3], true),
    EntityRecord::new("real", &[0x211C], true),
    EntityRecord::new("realine", &[0x211B], true),
    EntityRecord::new("realpart", &[0x211C], true),
    EntityRecord::new("reals", &[0x211D], true),
    EntityRecord::new("rect", &[0x25AD], true),
    EntityRecord::new("reg", &[0x00AE], false),
    EntityRecord::new("rfisht", &[0x297D], true),
    EntityRecord::new("rfloor", &[0x230B], true),
    EntityRecord::new("rfr", &[0x1D52F], true),
    EntityRecord::new("rhard", &[0x21C1], true),
    EntityRecord::new("rharu", &[0x21C0], true),
    EntityRecord::new("rharul", &[0x296C], true),
    EntityRecord::new("rho", &[0x03C1], true),
    EntityRecord::new("rhov", &[0x03F1], true),
    EntityRecord::new("rightarrow", &[0x2192], true),
    EntityRecord::new("rightarrowtail", &[0x21A3], true),
    EntityRecord::new("rightharpoondown", &[0x21C1], true),
    EntityRecord::new("rightharpoonup", &[0x21C0], true),
    EntityRecord::new("rightleftarrows", &[0x21C4], true),
    EntityRecord::new("rightleftharpoons", &[0x21CC], true),
    EntityRecord::new("rightrightarrows", &[0x21C9], true),
    EntityRecord::new("rightsquigarrow", &[0x219D], true),
    EntityRecord::new("rightthreetimes", &[0x22CC], true),
    EntityRecord::new("ring", &[0x02DA], true),
    EntityRecord::new("risingdotseq", &[0x2253], true),
    EntityRecord::new("rlarr", &[0x21C4], true),
    EntityRecord::new("rlhar", &[0x21CC], true),
    EntityRecord::new("rlm", &[0x200F], true),
    EntityRecord::new("rmoust", &[0x23B1], true),
    EntityRecord::new("rmoustache", &[0x23B1], true),
    EntityRecord::new("rnmid", &[0x2AEE], true),
    EntityRecord::new("roang", &[0x27ED], true),
    EntityRecord::new("roarr", &[0x21FE], true),
    EntityRecord::new("robrk", &[0x27E7], true),
    EntityRecord::new("ropar", &[0x2986], true),
    EntityRecord::new("ropf", &[0x1D563], true),
    EntityRecord::new("roplus", &[0x2A2E], true),
    EntityRecord::new("rotimes", &[0x2A35], true),
    EntityRecord::new("rpar", &[0x0029], true),
    EntityRecord::new("rpargt", &[0x2994], true),
    EntityRecord::new("rppolint", &[0x2A12], true),
    EntityRecord::new("rrarr", &[0x21C9], true),
    EntityRecord::new("rsaquo", &[0x203A], true),
    EntityRecord::new("rscr", &[0x1D4C7], true),
    EntityRecord::new("rsh", &[0x21B1], true),
    EntityRecord::new("rsqb", &[0x005D], true),
    EntityRecord::new("rsquo", &[0x2019], true),
    EntityRecord::new("rsquor", &[0x2019], true),
    EntityRecord::new("rthree", &[0x22CC], true),
    EntityRecord::new("rtimes", &[0x22CA], true),
    EntityRecord::new("rtri", &[0x25B9], true),
    EntityRecord::new("rtrie", &[0x22B5], true),
    EntityRecord::new("rtrif", &[0x25B8], true),
    EntityRecord::new("rtriltri", &[0x29CE], true),
    EntityRecord::new("ruluhar", &[0x2968], true),
    EntityRecord::new("rx", &[0x211E], true),
    EntityRecord::new("sacute", &[0x015B], true),
    EntityRecord::new("sbquo", &[0x201A], true),
    EntityRecord::new("sc", &[0x227B], true),
    EntityRecord::new("scE", &[0x2AB4], true),
    EntityRecord::new("scap", &[0x2AB8], true),
    EntityRecord::new("scaron", &[0x0161], true),
    EntityRecord::new("sccue", &[0x227D], true),
    EntityRecord::new("sce", &[0x2AB0], true),
    EntityRecord::new("scedil", &[0x015F], true),
    EntityRecord::new("scirc", &[0x015D], true),
    EntityRecord::new("scnE", &[0x2AB6], true),
    EntityRecord::new("scnap", &[0x2ABA], true),
    EntityRecord::new("scnsim", &[0x22E9], true),
    EntityRecord::new("scpolint", &[0x2A13], true),
    EntityRecord::new("scsim", &[0x227F], true),
    EntityRecord::new("scy", &[0x0441], true),
    EntityRecord::new("sdot", &[0x22C5], true),
    EntityRecord::new("sdotb", &[0x22A1], true),
    EntityRecord::new("sdote", &[0x2A66], true),
    EntityRecord::new("seArr", &[0x21D8], true),
    EntityRecord::new("searhk", &[0x2925], true),
    EntityRecord::new("searr", &[0x2198], true),
    EntityRecord::new("searrow", &[0x2198], true),
    EntityRecord::new("sect", &[0x00A7], false),
    EntityRecord::new("semi", &[0x003B], true),
    EntityRecord::new("seswar", &[0x2929], true),
    EntityRecord::new("setminus", &[0x2216], true),
    EntityRecord::new("setmn", &[0x2216], true),
    EntityRecord::new("sext", &[0x2736], true),
    EntityRecord::new("sfr", &[0x1D530], true),
    EntityRecord::new("sfrown", &[0x2322], true),
    EntityRecord::new("sharp", &[0x266F], true),
    EntityRecord::new("shchcy", &[0x0449], true),
    EntityRecord::new("shcy", &[0x0448], true),
    EntityRecord::new("shortmid", &[0x2223], true),
    EntityRecord::new("shortparallel", &[0x2225], true),
    EntityRecord::new("shy", &[0x00AD], false),
    EntityRecord::new("sigma", &[0x03C3], true),
    EntityRecord::new("sigmaf", &[0x03C2], true),
    EntityRecord::new("sigmav", &[0x03C2], true),
    EntityRecord::new("sim", &[0x223C], true),
    EntityRecord::new("simdot", &[0x2A6A], true),
    EntityRecord::new("sime", &[0x2243], true),
    EntityRecord::new("simeq", &[0x2243], true),
    EntityRecord::new("simg", &[0x2A9E], true),
    EntityRecord::new("simgE", &[0x2AA0], true),
    EntityRecord::new("siml", &[0x2A9D], true),
    EntityRecord::new("simlE", &[0x2A9F], true),
    EntityRecord::new("simne", &[0x2246], true),
    EntityRecord::new("simplus", &[0x2A24], true),
    EntityRecord::new("simrarr", &[0x2972], true),
    EntityRecord::new("slarr", &[0x2190], true),
    EntityRecord::new("smallsetminus", &[0x2216], true),
    EntityRecord::new("smashp", &[0x2A33], true),
    EntityRecord::new("smeparsl", &[0x29E4], true),
    EntityRecord::new("smid", &[0x2223], true),
    EntityRecord::new("smile", &[0x2323], true),
    EntityRecord::new("smt", &[0x2AAA], true),
    EntityRecord::new("smte", &[0x2AAC], true),
    EntityRecord::new("smtes", &[0x2AAC, 0xFE00], true),
    EntityRecord::new("softcy", &[0x044C], true),
    EntityRecord::new("sol", &[0x002F], true),
    EntityRecord::new("solb", &[0x29C4], true),
    EntityRecord::new("solbar", &[0x233F], true),
    EntityRecord::new("sopf", &[0x1D564], true),
    EntityRecord::new("spades", &[0x2660], true),
    EntityRecord::new("spadesuit", &[0x2660], true),
    EntityRecord::new("spar", &[0x2225], true),
    EntityRecord::new("sqcap", &[0x2293], true),
    EntityRecord::new("sqcaps", &[0x2293, 0xFE00], true),
    EntityRecord::new("sqcup", &[0x2294], true),
    EntityRecord::new("sqcups", &[0x2294, 0xFE00], true),
    EntityRecord::new("sqsub", &[0x228F], true),
    EntityRecord::new("sqsube", &[0x2291], true),
    EntityRecord::new("sqsubset", &[0x228F], true),
    EntityRecord::new("sqsubseteq", &[0x2291], true),
    EntityRecord::new("sqsup", &[0x2290], true),
    EntityRecord::new("sqsupe", &[0x2292], true),
    EntityRecord::new("sqsupset", &[0x2290], true),
    EntityRecord::new("sqsupseteq", &[0x2292], true),
    EntityRecord::new("squ", &[0x25A1], true),
    EntityRecord::new("square", &[0x25A1], true),
    EntityRecord::new("squarf", &[0x25AA], true),
    EntityRecord::new("squf", &[0x25AA], true),
    EntityRecord::new("srarr", &[0x2192], true),
    EntityRecord::new("sscr", &[0x1D4C8], true),
    EntityRecord::new("ssetmn", &[0x2216], true),
    EntityRecord::new("ssmile", &[0x2323], true),
    EntityRecord::new("sstarf", &[0x22C6], true),
    EntityRecord::new("star", &[0x2606], true),
    EntityRecord::new("starf", &[0x2605], true),
    EntityRecord::new("straightepsilon", &[0x03F5], true),
    EntityRecord::new("straightphi", &[0x03D5], true),
    EntityRecord::new("strns", &[0x00AF], true),
    EntityRecord::new("sub", &[0x2282], true),
    EntityRecord::new("subE", &[0x2AC5], true),
    EntityRecord::new("subdot", &[0x2ABD], true),
    EntityRecord::new("sube", &[0x2286], true),
    EntityRecord::new("subedot", &[0x2AC3], true),
    EntityRecord::new("submult", &[0x2AC1], true),
    EntityRecord::new("subnE", &[0x2ACB], true),
    EntityRecord::new("subne", &[0x228A], true),
    EntityRecord::new("subplus", &[0x2ABF], true),
    EntityRecord::new("subrarr", &[0x2979], true),
    EntityRecord::new("subset", &[0x2282], true),
    EntityRecord::new("subseteq", &[0x2286], true),
    EntityRecord::new("subseteqq", &[0x2AC5], true),
    EntityRecord::new("subsetneq", &[0x228A], true),
    EntityRecord::new("subsetneqq", &[0x2ACB], true),
    EntityRecord::new("subsim", &[0x2AC7], true),
    EntityRecord::new("subsub", &[0x2AD5], true),
    EntityRecord::new("subsup", &[0x2AD3], true),
    EntityRecord::new("succ", &[0x227B], true),
    EntityRecord::new("succapprox", &[0x2AB8], true),
    EntityRecord::new("succcurlyeq", &[0x227D], true),
    EntityRecord::new("succeq", &[0x2AB0], true),
    EntityRecord::new("succnapprox", &[0x2ABA], true),
    EntityRecord::new("succneqq", &[0x2AB6], true),
    EntityRecord::new("succnsim", &[0x22E9], true),
    EntityRecord::new("succsim", &[0x227F], true),
    EntityRecord::new("sum", &[0x2211], true),
    EntityRecord::new("sung", &[0x266A], true),
    EntityRecord::new("sup", &[0x2283], true),
    EntityRecord::new("sup1", &[0x00B9], false),
    EntityRecord::new("sup2", &[0x00B2], false),
    EntityRecord::new("sup3", &[0x00B3], false),
    EntityRecord::new("supE", &[0x2AC6], true),
    EntityRecord::new("supdot", &[0x2ABE], true),
    EntityRecord::new("supdsub", &[0x2AD8], true),
    EntityRecord::new("supe", &[0x2287], true),
    EntityRecord::new("supedot", &[0x2AC4], true),
    EntityRecord::new("suphsol", &[0x27C9], true),
    EntityRecord::new("suphsub", &[0x2AD7], true),
    EntityRecord::new("suplarr", &[0x297B], true),
    EntityRecord::new("supmult", &[0x2AC2], true),
    EntityRecord::new("supnE", &[0x2ACC], true),
    EntityRecord::new("supne", &[0x228B], true),
    EntityRecord::new("supplus", &[0x2AC0], true),
    EntityRecord::new("supset", &[0x2283], true),
    EntityRecord::new("supseteq", &[0x2287], true),
    EntityRecord::new("supseteqq", &[0x2AC6], true),
    EntityRecord::new("supsetneq", &[0x228B], true),
    EntityRecord::new("supsetneqq", &[0x2ACC], true),
    EntityRecord::new("supsim", &[0x2AC8], true),
    EntityRecord::new("supsub", &[0x2AD4], true),
    EntityRecord::new("supsup", &[0x2AD6], true),
    EntityRecord::new("swArr", &[0x21D9], true),
    EntityRecord::new("swarhk", &[0x2926], true),
    EntityRecord::new("swarr", &[0x2199], true),
    EntityRecord::new("swarrow", &[0x2199], true),
    EntityRecord::new("swnwar", &[0x292A], true),
    EntityRecord::new("szlig", &[0x00DF], false),
    EntityRecord::new("target", &[0x2316], true),
    EntityRecord::new("tau", &[0x03C4], true),
    EntityRecord::new("tbrk", &[0x23B4], true),
    EntityRecord::new("tcaron", &[0x0165], true),
    EntityRecord::new("tcedil", &[0x0163], true),
    EntityRecord::new("tcy", &[0x0442], true),
    EntityRecord::new("tdot", &[0x20DB], true),
    EntityRecord::new("telrec", &[0x2315], true),
    EntityRecord::new("tfr", &[0x1D531], true),
    EntityRecord::new("there4", &[0x2234], true),
    EntityRecord::new("therefore", &[0x2234], true),
    EntityRecord::new("theta", &[0x03B8], true),
    EntityRecord::new("thetasym", &[0x03D1], true),
    EntityRecord::new("thetav", &[0x03D1], true),
    EntityRecord::new("thickapprox", &[0x2248], true),
    EntityRecord::new("thicksim", &[0x223C], true),
    EntityRecord::new("thinsp", &[0x2009], true),
    EntityRecord::new("thkap", &[0x2248], true),
    EntityRecord::new("thksim", &[0x223C], true),
    EntityRecord::new("thorn", &[0x00FE], false),
    EntityRecord::new("tilde", &[0x02DC], true),
    EntityRecord::new("times", &[0x00D7], false),
    EntityRecord::new("timesb", &[0x22A0], true),
    EntityRecord::new("timesbar", &[0x2A31], true),
    EntityRecord::new("timesd", &[0x2A30], true),
    EntityRecord::new("tint", &[0x222D], true),
    EntityRecord::new("toea", &[0x2928], true),
    EntityRecord::new("top", &[0x22A4], true),
    EntityRecord::new("topbot", &[0x2336], true),
    EntityRecord::new("topcir", &[0x2AF1], true),
    EntityRecord::new("topf", &[0x1D565], true),
    EntityRecord::new("topfork", &[0x2ADA], true),
    EntityRecord::new("tosa", &[0x2929], true),
    EntityRecord::new("tprime", &[0x2034], true),
    EntityRecord::new("trade", &[0x2122], true),
    EntityRecord::new("triangle", &[0x25B5], true),
    EntityRecord::new("triangledown", &[0x25BF], true),
    EntityRecord::new("triangleleft", &[0x25C3], true),
    EntityRecord::new("trianglelefteq", &[0x22B4], true),
    EntityRecord::new("triangleq", &[0x225C], true),
    EntityRecord::new("triangleright", &[0x25B9], true),
    EntityRecord::new("trianglerighteq", &[0x22B5], true),
    EntityRecord::new("tridot", &[0x25EC], true),
    EntityRecord::new("trie", &[0x225C], true),
    EntityRecord::new("triminus", &[0x2A3A], true),
    EntityRecord::new("triplus", &[0x2A39], true),
    EntityRecord::new("trisb", &[0x29CD], true),
    EntityRecord::new("tritime", &[0x2A3B], true),
    EntityRecord::new("trpezium", &[0x23E2], true),
    EntityRecord::new("tscr", &[0x1D4C9], true),
    EntityRecord::new("tscy", &[0x0446], true),
    EntityRecord::new("tshcy", &[0x045B], true),
    EntityRecord::new("tstrok", &[0x0167], true),
    EntityRecord::new("twixt", &[0x226C], true),
    EntityRecord::new("twoheadleftarrow", &[0x219E], true),
    EntityRecord::new("twoheadrightarrow", &[0x21A0], true),
    EntityRecord::new("uArr", &[0x21D1], true),
    EntityRecord::new("uHar", &[0x2963], true),
    EntityRecord::new("uacute", &[0x00FA], false),
    EntityRecord::new("uarr", &[0x2191], true),
    EntityRecord::new("ubrcy", &[0x045E], true),
    EntityRecord::new("ubreve", &[0x016D], true),
    EntityRecord::new("ucirc", &[0x00FB], false),
    EntityRecord::new("ucy", &[0x0443], true),
    EntityRecord::new("udarr", &[0x21C5], true),
    EntityRecord::new("udblac", &[0x0171], true),
    EntityRecord::new("udhar", &[0x296E], true),
    EntityRecord::new("ufisht", &[0x297E], true),
    EntityRecord::new("ufr", &[0x1D532], true),
    EntityRecord::new("ugrave", &[0x00F9], false),
    EntityRecord::new("uharl", &[0x21BF], true),
    EntityRecord::new("uharr", &[0x21BE], true),
    EntityRecord::new("uhblk", &[0x2580], true),
    EntityRecord::new("ulcorn", &[0x231C], true),
    EntityRecord::new("ulcorner", &[0x231C], true),
    EntityRecord::new("ulcrop", &[0x230F], true),
    EntityRecord::new("ultri", &[0x25F8], true),
    EntityRecord::new("umacr", &[0x016B], true),
    EntityRecord::new("uml", &[0x00A8], false),
    EntityRecord::new("uogon", &[0x0173], true),
    EntityRecord::new("uopf", &[0x1D566], true),
    EntityRecord::new("uparrow", &[0x2191], true),
    EntityRecord::new("updownarrow", &[0x2195], true),
    EntityRecord::new("upharpoonleft", &[0x21BF], true),
    EntityRecord::new("upharpoonright", &[0x21BE], true),
    EntityRecord::new("uplus", &[0x228E], true),
    EntityRecord::new("upsi", &[0x03C5], true),
    EntityRecord::new("upsih", &[0x03D2], true),
    EntityRecord::new("upsilon", &[0x03C5], true),
    EntityRecord::new("upuparrows", &[0x21C8], true),
    EntityRecord::new("urcorn", &[0x231D], true),
    EntityRecord::new("urcorner", &[0x231D], true),
    EntityRecord::new("urcrop", &[0x230E], true),
    EntityRecord::new("uring", &[0x016F], true),
    EntityRecord::new("urtri", &[0x25F9], true),
    EntityRecord::new("uscr", &[0x1D4CA], true),
    EntityRecord::new("utdot", &[0x22F0], true),
    EntityRecord::new("utilde", &[0x0169], true),
    EntityRecord::new("utri", &[0x25B5], true),
    EntityRecord::new("utrif", &[0x25B4], true),
    EntityRecord::new("uuarr", &[0x21C8], true),
    EntityRecord::new("uuml", &[0x00FC], false),
    EntityRecord::new("uwangle", &[0x29A7], true),
    EntityRecord::new("vArr", &[0x21D5], true),
    EntityRecord::new("vBar", &[0x2AE8], true),
    EntityRecord::new("vBarv", &[0x2AE9], true),
    EntityRecord::new("vDash", &[0x22A8], true),
    EntityRecord::new("vangrt", &[0x299C], true),
    EntityRecord::new("varepsilon", &[0x03F5], true),
    EntityRecord::new("varkappa", &[0x03F0], true),
    EntityRecord::new("varnothing", &[0x2205], true),
    EntityRecord::new("varphi", &[0x03D5], true),
    EntityRecord::new("varpi", &[0x03D6], true),
    EntityRecord::new("varpropto", &[0x221D], true),
    EntityRecord::new("varr", &[0x2195], true),
    EntityRecord::new("varrho", &[0x03F1], true),
    EntityRecord::new("varsigma", &[0x03C2], true),
    EntityRecord::new("varsubsetneq", &[0x228A, 0xFE00], true),
    EntityRecord::new("varsubsetneqq", &[0x2ACB, 0xFE00], true),
    EntityRecord::new("varsupsetneq", &[0x228B, 0xFE00], true),
    EntityRecord::new("varsupsetneqq", &[0x2ACC, 0xFE00], true),
    EntityRecord::new("vartheta", &[0x03D1], true),
    EntityRecord::new("vartriangleleft", &[0x22B2], true),
    EntityRecord::new("vartriangleright", &[0x22B3], true),
    EntityRecord::new("vcy", &[0x0432], true),
    EntityRecord::new("vdash", &[0x22A2], true),
    EntityRecord::new("vee", &[0x2228], true),
    EntityRecord::new("veebar", &[0x22BB], true),
    EntityRecord::new("veeeq", &[0x225A], true),
    EntityRecord::new("vellip", &[0x22EE], true),
    EntityRecord::new("verbar", &[0x007C], true),
    EntityRecord::new("vert", &[0x007C], true),
    EntityRecord::new("vfr", &[0x1D533], true),
    EntityRecord::new("vltri", &[0x22B2], true),
    EntityRecord::new("vnsub", &[0x2282, 0x20D2], true),
    EntityRecord::new("vnsup", &[0x2283, 0x20D2], true),
    EntityRecord::new("vopf", &[0x1D567], true),
    EntityRecord::new("vprop", &[0x221D], true),
    EntityRecord::new("vrtri", &[0x22B3], true),
    EntityRecord::new("vscr", &[0x1D4CB], true),
    EntityRecord::new("vsubnE", &[0x2ACB, 0xFE00], true),
    EntityRecord::new("vsubne", &[0x228A, 0xFE00], true),
    EntityRecord::new("vsupnE", &[0x2ACC, 0xFE00], true),
    EntityRecord::new("vsupne", &[0x228B, 0xFE00], true),
    EntityRecord::new("vzigzag", &[0x299A], true),
    EntityRecord::new("wcirc", &[0x0175], true),
    EntityRecord::new("wedbar", &[0x2A5F], true),
    EntityRecord::new("wedge", &[0x2227], true),
    EntityRecord::new("wedgeq", &[0x2259], true),
    EntityRecord::new("weierp", &[0x2118], true),
    EntityRecord::new("wfr", &[0x1D534], true),
    EntityRecord::new("wopf", &[0x1D568], true),
    EntityRecord::new("wp", &[0x2118], true),
    EntityRecord::new("wr", &[0x2240], true),
    EntityRecord::new("wreath", &[0x2240], true),
    EntityRecord::new("wscr", &[0x1D4CC], true),
    EntityRecord::new("xcap", &[0x22C2], true),
    EntityRecord::new("xcirc", &[0x25EF], true),
    EntityRecord::new("xcup", &[0x22C3], true),
    EntityRecord::new("xdtri", &[0x25BD], true),
    EntityRecord::new("xfr", &[0x1D535], true),
    EntityRecord::new("xhArr", &[0x27FA], true),
    EntityRecord::new("xharr", &[0x27F7], true),
    EntityRecord::new("xi", &[0x03BE], true),
    EntityRecord::new("xlArr", &[0x27F8], true),
    EntityRecord::new("xlarr", &[0x27F5], true),
    EntityRecord::new("xmap", &[0x27FC], true),
    EntityRecord::new("xnis", &[0x22FB], true),
    EntityRecord::new("xodot", &[0x2A00], true),
    EntityRecord::new("xopf", &[0x1D569], true),
    EntityRecord::new("xoplus", &[0x2A01], true),
    EntityRecord::new("xotime", &[0x2A02], true),
    EntityRecord::new("xrArr", &[0x27F9], true),
    EntityRecord::new("xrarr", &[0x27F6], true),
    EntityRecord::new("xscr", &[0x1D4CD], true),
    EntityRecord::new("xsqcup", &[0x2A06], true),
    EntityRecord::new("xuplus", &[0x2A04], true),
    EntityRecord::new("xutri", &[0x25B3], true),
    EntityRecord::new("xvee", &[0x22C1], true),
    EntityRecord::new("xwedge", &[0x22C0], true),
    EntityRecord::new("yacute", &[0x00FD], false),
    EntityRecord::new("yacy", &[0x044F], true),
    EntityRecord::new("ycirc", &[0x0177], true),
    EntityRecord::new("ycy", &[0x044B], true),
    EntityRecord::new("yen", &[0x00A5], false),
    EntityRecord::new("yfr", &[0x1D536], true),
    EntityRecord::new("yicy", &[0x0457], true),
    EntityRecord::new("yopf", &[0x1D56A], true),
    EntityRecord::new("yscr", &[0x1D4CE], true),
    EntityRecord::new("yucy", &[0x044E], true),
    EntityRecord::new("yuml", &[0x00FF], false),
    EntityRecord::new("zacute", &[0x017A], true),
    EntityRecord::new("zcaron", &[0x017E], true),
    EntityRecord::new("zcy", &[0x0437], true),
    EntityRecord::new("zdot", &[0x017C], true),
    EntityRecord::new("zeetrf", &[0x2128], true),
    EntityRecord::new("zeta", &[0x03B6], true),
    EntityRecord::new("zfr", &[0x1D537], true),
    EntityRecord::new("zhcy", &[0x0436], true),
    EntityRecord::new("zigrarr", &[0x21DD], true),
    EntityRecord::new("zopf", &[0x1D56B], true),
    EntityRecord::new("zscr", &[0x1D4CF], true),
    EntityRecord::new("zwj", &[0x200D], true),
    EntityRecord::new("zwnj", &[0x200C], true),
];

pub(crate) const LEGACY_COUNT: usize = 106;
