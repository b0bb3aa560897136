//! Keyword tables.
//!
//! `KEYWORDS` is the allow-list consulted by the undefined-symbol checks.
//! It mixes real language keywords with predefined constants, variables,
//! enumerations and standard-library names, which is what an identifier
//! needs to be to count as "known" without a declaration.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Keywords, predefined constants and standard-library names.
pub static KEYWORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    let mut set = HashSet::new();

    // Data types
    set.extend([
        "bool", "char", "class", "color", "datetime", "double", "enum", "float", "int",
        "long", "short", "string", "struct", "uchar", "uint", "ulong", "ushort", "void",
        "MqlDateTime", "MqlRates", "MqlTick",
    ]);

    // Modifiers
    set.extend([
        "const", "enum", "extern", "input", "sinput", "static", "virtual", "override",
        "abstract", "final", "public", "private", "protected",
    ]);

    // Boolean literals
    set.extend([
        "true", "false",
    ]);

    // Initialization and deinitialization reasons
    set.extend([
        "INIT_SUCCEEDED", "INIT_FAILED", "INIT_PARAMETERS_INCORRECT", "REASON_PROGRAM",
        "REASON_REMOVE", "REASON_RECOMPILE", "REASON_CHARTCHANGE", "REASON_CHARTCLOSE",
        "REASON_PARAMETERS", "REASON_ACCOUNT", "REASON_TEMPLATE", "REASON_INITFAILED",
        "REASON_CLOSE",
    ]);

    // Drawing and line styles
    set.extend([
        "DRAW_LINE", "DRAW_SECTION", "DRAW_HISTOGRAM", "DRAW_ARROW", "DRAW_ZIGZAG",
        "DRAW_NONE", "DRAW_FILLING", "DRAW_BARS", "DRAW_CANDLES", "DRAW_COLOR_LINE",
        "DRAW_COLOR_SECTION", "DRAW_COLOR_HISTOGRAM", "DRAW_COLOR_ARROW",
        "DRAW_COLOR_ZIGZAG", "DRAW_COLOR_BARS", "DRAW_COLOR_CANDLES", "STYLE_SOLID",
        "STYLE_DASH", "STYLE_DOT", "STYLE_DASHDOT", "STYLE_DASHDOTDOT",
    ]);

    // Indicator and plot properties
    set.extend([
        "EMPTY_VALUE", "INDICATOR_DATA", "INDICATOR_COLOR_INDEX", "INDICATOR_CALCULATIONS",
        "INDICATOR_DIGITS", "INDICATOR_HEIGHT", "INDICATOR_LEVELS", "INDICATOR_LEVELCOLOR",
        "INDICATOR_LEVELSTYLE", "INDICATOR_LEVELWIDTH", "INDICATOR_MINIMUM",
        "INDICATOR_MAXIMUM", "INDICATOR_SHORTNAME", "INDICATOR_LEVELTEXT",
        "INDICATOR_LEVELVALUE", "PLOT_ARROW", "PLOT_ARROW_SHIFT", "PLOT_COLOR_INDEXES",
        "PLOT_DRAW_BEGIN", "PLOT_DRAW_TYPE", "PLOT_SHOW_DATA", "PLOT_SHIFT",
        "PLOT_LINE_COLOR", "PLOT_LINE_STYLE", "PLOT_LINE_WIDTH", "PLOT_EMPTY_VALUE",
    ]);

    // Special values and terminal properties
    set.extend([
        "NULL", "EMPTY", "CLR_NONE", "WHOLE_ARRAY", "WRONG_VALUE", "TERMINAL_MAXBARS",
        "TERMINAL_BUILD", "TERMINAL_COMMUNITY_ACCOUNT", "TERMINAL_COMMUNITY_CONNECTION",
        "TERMINAL_CONNECTED", "TERMINAL_DLLS_ALLOWED", "TERMINAL_TRADE_ALLOWED",
        "TERMINAL_EMAIL_ENABLED", "TERMINAL_FTP_ENABLED", "TERMINAL_NOTIFICATIONS_ENABLED",
        "TERMINAL_SCREEN_DPIW", "TERMINAL_SCREEN_DPIH",
    ]);

    // Moving-average, price, order and colour constants
    set.extend([
        "MODE_SMA", "MODE_EMA", "MODE_SMMA", "MODE_LWMA", "PRICE_CLOSE", "PRICE_OPEN",
        "PRICE_HIGH", "PRICE_LOW", "PRICE_MEDIAN", "PRICE_TYPICAL", "PRICE_WEIGHTED",
        "MODE_MAIN", "MODE_SIGNAL", "MODE_UPPER", "MODE_LOWER", "MODE_TENKANSEN",
        "MODE_KIJUNSEN", "MODE_SENKOUSPANA", "MODE_SENKOUSPANB", "MODE_CHINKOUSPAN",
        "MODE_GATORJAW", "MODE_GATORTEETH", "MODE_GATORLIPS", "MODE_PLUSDI", "MODE_MINUSDI",
        "MODE_HISTOGRAM", "OP_BUY", "OP_SELL", "OP_BUYLIMIT", "OP_SELLLIMIT", "OP_BUYSTOP",
        "OP_SELLSTOP", "SELECT_BY_POS", "SELECT_BY_TICKET", "MODE_TRADES", "MODE_HISTORY",
        "clrNONE", "clrBlack", "clrDarkGreen", "clrDarkSlateGray", "clrOlive", "clrGreen",
        "clrTeal", "clrNavy", "clrPurple", "clrMaroon", "clrIndigo", "clrMidnightBlue",
        "clrDarkBlue", "clrDarkOliveGreen", "clrSaddleBrown", "clrForestGreen",
        "clrOliveDrab", "clrSeaGreen", "clrDarkGoldenrod", "clrDarkSlateBlue", "clrSienna",
        "clrMediumBlue", "clrBrown", "clrDarkTurquoise", "clrDimGray", "clrLightSeaGreen",
        "clrDarkViolet", "clrFireBrick", "clrMediumVioletRed", "clrMediumSeaGreen",
        "clrChocolate", "clrCrimson", "clrSteelBlue", "clrGoldenrod",
        "clrMediumSpringGreen", "clrLawnGreen", "clrCadetBlue", "clrDarkOrchid",
        "clrYellowGreen", "clrLimeGreen", "clrOrangeRed", "clrDarkOrange", "clrOrange",
        "clrGold", "clrYellow", "clrChartreuse", "clrLime", "clrSpringGreen", "clrAqua",
        "clrDeepSkyBlue", "clrBlue", "clrMagenta", "clrRed", "clrGray", "clrSlateGray",
        "clrPeru", "clrBlueViolet", "clrLightSlateGray", "clrDeepPink",
        "clrMediumTurquoise", "clrDodgerBlue", "clrTurquoise", "clrRoyalBlue",
        "clrSlateBlue", "clrDarkKhaki", "clrIndianRed", "clrMediumOrchid", "clrGreenYellow",
        "clrMediumAquamarine", "clrDarkSeaGreen", "clrTomato", "clrRosyBrown", "clrOrchid",
        "clrMediumPurple", "clrPaleVioletRed", "clrCoral", "clrCornflowerBlue",
        "clrDarkGray", "clrSandyBrown", "clrMediumSlateBlue", "clrTan", "clrDarkSalmon",
        "clrBurlyWood", "clrHotPink", "clrSalmon", "clrViolet", "clrLightCoral",
        "clrSkyBlue", "clrLightSalmon", "clrPlum", "clrKhaki", "clrLightGreen",
        "clrAquamarine", "clrSilver", "clrLightSkyBlue", "clrLightSteelBlue",
        "clrLightBlue", "clrPaleGreen", "clrThistle", "clrPowderBlue", "clrPaleGoldenrod",
        "clrPaleTurquoise", "clrLightGray", "clrWheat", "clrNavajoWhite", "clrMoccasin",
        "clrLightPink", "clrGainsboro", "clrPeachPuff", "clrPink", "clrBisque",
        "clrLightGoldenrod", "clrBlanchedAlmond", "clrLemonChiffon", "clrBeige",
        "clrAntiqueWhite", "clrPapayaWhip", "clrCornsilk", "clrLightYellow", "clrLightCyan",
        "clrLinen", "clrLavender", "clrMistyRose", "clrOldLace", "clrWhiteSmoke",
        "clrSeashell", "clrIvory", "clrHoneydew", "clrAliceBlue", "clrLavenderBlush",
        "clrMintCream", "clrSnow", "clrWhite",
    ]);

    // Standard enumerations
    set.extend([
        "ENUM_TIMEFRAMES", "ENUM_MA_METHOD", "ENUM_APPLIED_PRICE", "ENUM_OBJECT",
        "ENUM_OBJECT_PROPERTY_INTEGER", "ENUM_OBJECT_PROPERTY_DOUBLE",
        "ENUM_OBJECT_PROPERTY_STRING", "ENUM_INDICATOR_TYPE", "ENUM_DATATYPE",
        "ENUM_DRAW_TYPE", "ENUM_LINE_STYLE", "ENUM_PLOT_PROPERTY_INTEGER",
        "ENUM_PLOT_PROPERTY_DOUBLE", "ENUM_PLOT_PROPERTY_STRING",
        "ENUM_INDICATOR_PROPERTY_INTEGER", "ENUM_INDICATOR_PROPERTY_DOUBLE",
        "ENUM_INDICATOR_PROPERTY_STRING", "ENUM_ORDER_TYPE", "ENUM_POSITION_TYPE",
        "ENUM_TRADE_REQUEST_ACTIONS", "ENUM_TRADE_TRANSACTION_TYPE",
        "ENUM_SYMBOL_INFO_DOUBLE", "ENUM_SYMBOL_INFO_INTEGER", "ENUM_SYMBOL_INFO_STRING",
        "ENUM_TERMINAL_INFO_INTEGER", "ENUM_TERMINAL_INFO_DOUBLE",
        "ENUM_TERMINAL_INFO_STRING", "ENUM_MQL_INFO_INTEGER", "ENUM_MQL_INFO_STRING",
        "ENUM_ACCOUNT_INFO_INTEGER", "ENUM_ACCOUNT_INFO_DOUBLE", "ENUM_ACCOUNT_INFO_STRING",
    ]);

    // Predefined variables
    set.extend([
        "Ask", "Bid", "Point", "Digits", "Symbol", "Period", "_Symbol", "_Period",
        "MagicNumber", "StopLoss", "TakeProfit", "_Point", "_Digits", "_LastError",
        "_UninitReason", "_RandomSeed", "_StopFlag", "_IsX64", "_IsVisualMode",
        "AccountBalance", "AccountEquity", "AccountFreeMargin", "AccountMargin",
        "AccountProfit", "AccountCredit", "AccountName", "AccountNumber", "AccountLeverage",
        "AccountCompany", "AccountCurrency", "AccountStopoutMode", "AccountStopoutLevel",
        "_Ask", "_Bid",
    ]);

    // Property names
    set.extend([
        "copyright", "link", "version", "description", "strict", "indicator_chart_window",
        "indicator_separate_window", "indicator_buffers", "indicator_plots",
        "indicator_minimum", "indicator_maximum", "indicator_labelN", "indicator_colorN",
        "indicator_styleN", "indicator_widthN", "indicator_typeN", "script_show_confirm",
        "script_show_inputs", "library", "indicator_applied_price", "indicator_height",
        "indicator_level", "indicator_levelcolor", "indicator_levelstyle",
        "indicator_levelwidth", "indicator_leveltext",
    ]);

    // Common functions and event handlers
    set.extend([
        "Alert", "Print", "Comment", "GetLastError", "OrderSend", "OrderClose",
        "OrderSelect", "OrdersTotal", "OrderProfit", "OrderType", "OrderLots",
        "OrderOpenPrice", "OrderClosePrice", "OrderStopLoss", "OrderTakeProfit",
        "OrderOpenTime", "OrderCloseTime", "OrderCommission", "OrderSwap", "OrderSymbol",
        "OrderMagicNumber", "OrderTicket",
    ]);

    // Standard library trade classes and constants
    set.extend([
        "CTrade", "CPositionInfo", "CSymbolInfo", "CAccountInfo", "POSITION_TYPE_BUY",
        "POSITION_TYPE_SELL", "ORDER_FILLING_FOK", "ORDER_FILLING_IOC",
        "ORDER_FILLING_RETURN", "ENUM_ORDER_TYPE", "ENUM_POSITION_TYPE",
        "ENUM_ORDER_FILLING", "ENUM_TIMEFRAMES", "INVALID_HANDLE", "trade", "position",
        "symbolInfo", "accountInfo", "ORDER_TYPE_BUY", "ORDER_TYPE_SELL",
        "ORDER_TYPE_BUY_LIMIT", "ORDER_TYPE_SELL_LIMIT", "ORDER_TYPE_BUY_STOP",
        "ORDER_TYPE_SELL_STOP", "ORDER_TYPE_BUY_STOP_LIMIT", "ORDER_TYPE_SELL_STOP_LIMIT",
        "DEAL_TYPE_BUY", "DEAL_TYPE_SELL", "DEAL_ENTRY_IN", "DEAL_ENTRY_OUT",
        "DEAL_ENTRY_INOUT", "DEAL_ENTRY_OUT_BY", "TRADE_TRANSACTION_ORDER_ADD",
        "TRADE_TRANSACTION_ORDER_UPDATE", "TRADE_TRANSACTION_ORDER_DELETE",
        "TRADE_TRANSACTION_DEAL_ADD", "TRADE_TRANSACTION_DEAL_UPDATE",
        "TRADE_TRANSACTION_DEAL_DELETE", "TRADE_TRANSACTION_HISTORY_ADD",
        "TRADE_TRANSACTION_HISTORY_UPDATE", "TRADE_TRANSACTION_HISTORY_DELETE",
        "TRADE_TRANSACTION_POSITION", "TRADE_TRANSACTION_REQUEST", "MqlTradeTransaction",
        "MqlTradeRequest", "MqlTradeResult",
    ]);

    // Standard library classes
    set.extend([
        "COrderInfo", "CHistoryOrderInfo", "CHistoryPositionInfo", "CDealInfo",
        "CIndicators", "CArrayObj", "CObject", "CFile", "CFileBin", "CFileTxt", "CString",
        "CDateTime", "CChart", "CCanvas", "CIndicator", "CiMA", "CiRSI", "CiMACD",
        "CiBands", "CiStochastic", "CiATR", "CiAO", "CiCCI", "CiEnvelopes", "CiFractals",
        "CiIchimoku", "CiMFI", "CiMomentum", "CiOBV", "CiSAR", "CiWPR", "CAnalysisResult",
    ]);

    // Names from the stock moving-average indicator sample
    set.extend([
        "FastMA_Period", "SlowMA_Period", "Signal_Period", "MA_Method", "Applied_Price",
        "FastMA_Buffer", "SlowMA_Buffer", "Signal_Buffer", "IndicatorName", "MinBars",
        "SetIndexBuffer", "SetIndexLabel", "SetIndexStyle", "SetIndexEmptyValue",
        "IndicatorShortName", "OnCalculate", "CalculateMA", "CalculateSMA", "CalculateEMA",
        "CalculateSMMA", "CalculateLWMA", "indicator_separate_window",
        "indicator_chart_window", "indicator_buffers", "indicator_plots",
    ]);

    // Control flow
    set.extend([
        "if", "else", "for", "while", "do", "switch", "case", "default", "return", "break",
        "continue", "group", "template", "typename", "sizeof", "delete",
    ]);

    // Common functions and event handlers
    set.extend([
        "OnInit", "OnDeinit", "OnStart", "OnTick", "OnTimer", "OnChartEvent", "OnBookEvent",
        "OnTradeTransaction", "OnTrade", "ArraySetAsSeries",
    ]);

    set.extend(RESERVED_KEYWORDS.iter().copied());
    set
});

/// Words that may never name a variable, class member, input or array.
pub static RESERVED_KEYWORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "if", "else", "for", "while", "do", "switch", "case", "default", "return", "break",
        "continue", "goto", "class", "struct", "enum", "interface", "union", "typename",
        "public", "private", "protected", "virtual", "static", "const", "volatile", "void",
        "int", "double", "string", "bool", "char", "short", "long", "uchar", "ushort", "uint",
        "ulong", "float", "color", "datetime", "input", "sinput", "extern", "template",
        "operator", "final", "override", "abstract", "new", "delete", "this", "true", "false",
        "NULL", "nullptr",
    ]
    .into_iter()
    .collect()
});

/// Header boilerplate never reported as an undefined variable.
///
/// Copyright banners and `#property link` URLs are full of these.
pub static SUPPRESSED_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "copyright", "link", "version", "property", "strict", "include", "import", "define",
        "ifdef", "ifndef", "endif", "else", "elif", "https", "www", "com", "org", "net",
        "MetaQuotes", "Software", "Corp", "mql4", "mql5",
    ]
    .into_iter()
    .collect()
});
