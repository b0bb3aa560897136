//! Builtin function tables.
//!
//! Functions available in both dialects live in [`COMMON_FUNCTIONS`];
//! the legacy MQL4 trading, account, window and time helpers and the MQL5
//! position, history and plot APIs are kept in separate sets.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Builtin functions shared by MQL4 and MQL5.
pub static COMMON_FUNCTIONS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    let mut set = HashSet::new();

    // Trading
    set.extend(["OrderSend", "OrderSelect", "OrdersTotal"]);

    // Technical indicators
    set.extend([
        "iMA", "iRSI", "iMACD", "iBands", "iStochastic", "iATR", "iAO", "iCCI", "iEnvelopes",
        "iFractals", "iIchimoku", "iMFI", "iMomentum", "iOBV", "iSAR", "iWPR", "iOsMA", "iADX",
        "iBearsPower", "iBullsPower", "iForce", "iStdDev", "iCustom", "iAlligator", "iAC",
        "iDeMarker", "iVolumes", "iRVI", "iHigh", "iLow", "iOpen", "iClose", "iTime",
        "iBarShift", "iHighest", "iLowest", "iVolume", "iBars",
    ]);

    // Indicator buffers
    set.extend([
        "SetIndexBuffer", "IndicatorSetDouble", "IndicatorSetInteger", "IndicatorSetString",
        "CopyRates", "CopyTime", "CopyOpen", "CopyHigh", "CopyLow", "CopyClose",
        "ArraySetAsSeries", "ArrayIsSeries",
    ]);

    // Terminal, symbol and messaging
    set.extend([
        "Print", "Alert", "Comment", "GetLastError", "SymbolSelect", "SymbolInfoDouble",
        "SymbolInfoInteger", "SymbolInfoString", "SymbolInfoTick", "NormalizeDouble",
        "TerminalInfoInteger", "TerminalInfoDouble", "TerminalInfoString", "MQLInfoInteger",
        "MQLInfoString", "Sleep", "MessageBox", "SendMail", "SendFTP", "SendNotification",
        "PlaySound", "SymbolsTotal", "SymbolName",
    ]);

    // Arrays
    set.extend([
        "ArraySize", "ArrayResize", "ArrayCopy", "ArrayCompare", "ArrayFree",
        "ArrayGetAsSeries", "ArrayInitialize", "ArrayFill", "ArrayRange", "ArrayMinimum",
        "ArrayMaximum", "ArraySort", "ArrayBsearch", "ArrayDimension",
    ]);

    // Strings and conversions
    set.extend([
        "StringLen", "StringSubstr", "StringTrimLeft", "StringTrimRight", "StringFind",
        "StringReplace", "StringFormat", "StringSplit", "StringJoin", "StringToLower",
        "StringToUpper", "StringGetCharacter", "StringSetCharacter", "StringTrim",
        "StringConcatenate", "StringCompare", "DoubleToString", "IntegerToString",
        "TimeToString", "TimeToStruct", "StructToTime", "StringToTime", "StringToDouble",
        "StringToInteger", "ColorToString", "StringToColor", "CharToString", "ShortToString",
        "CharArrayToString", "StringToCharArray",
    ]);

    // Math
    set.extend([
        "MathAbs", "MathMax", "MathMin", "MathRound", "MathCeil", "MathFloor", "MathSqrt",
        "MathPow", "MathLog", "MathExp", "MathSin", "MathCos", "MathTan", "MathArcsin",
        "MathArccos", "MathArctan", "MathRand", "MathMod", "MathSrand", "MathLog10",
        "MathIsValidNumber", "MathExpm1", "MathLog1p", "MathArccosh", "MathArcsinh",
        "MathArctanh", "MathCosh", "MathSinh", "MathTanh",
    ]);

    // Time
    set.extend([
        "TimeCurrent", "TimeLocal", "TimeGMT", "TimeDaylightSavings", "TimeGMTOffset",
    ]);

    // Files
    set.extend([
        "FileOpen", "FileClose", "FileWrite", "FileRead", "FileReadArray", "FileWriteArray",
        "FileReadDouble", "FileWriteDouble", "FileReadInteger", "FileWriteInteger",
        "FileReadString", "FileWriteString", "FileSeek", "FileTell", "FileSize",
        "FileIsEnding", "FileIsLineEnding", "FileDelete", "FileMove", "FileFlush", "FileCopy",
        "FileIsExist", "FileReadFloat", "FileWriteFloat", "FileReadLong", "FileWriteLong",
        "FileReadNumber", "FileWriteNumber", "FileFindFirst", "FileFindNext", "FileFindClose",
    ]);

    // Objects and charts
    set.extend([
        "ObjectCreate", "ObjectDelete", "ObjectsDeleteAll", "ObjectFind", "ObjectGetDouble",
        "ObjectGetInteger", "ObjectGetString", "ObjectSetDouble", "ObjectSetInteger",
        "ObjectSetString", "ObjectsTotal", "ObjectName", "ObjectGetTimeByValue",
        "ObjectGetValueByTime", "ObjectMove", "TextSetFont", "TextOut", "TextGetSize",
        "ChartID", "ChartOpen", "ChartClose", "ChartFirst", "ChartNext", "ChartRedraw",
        "ChartSetDouble", "ChartSetInteger", "ChartSetString", "ChartGetDouble",
        "ChartGetInteger", "ChartGetString", "ChartNavigate", "ChartIndicatorDelete",
        "ChartIndicatorName", "ChartIndicatorsTotal", "ChartWindowFind", "ChartWindowOnDropped",
        "ChartPriceOnDropped", "ChartTimeOnDropped", "ChartXOnDropped", "ChartYOnDropped",
        "ChartSymbol", "ChartPeriod", "ChartApplyTemplate", "ChartSaveTemplate",
        "ChartScreenShot", "ChartTimePriceToXY", "ChartXYToTimePrice", "ChartSetSymbolPeriod",
    ]);

    // Account
    set.extend(["AccountInfoDouble", "AccountInfoInteger", "AccountInfoString"]);

    // Moving-average helpers from the stock indicator sample
    set.extend([
        "CalculateMA", "CalculateSMA", "CalculateEMA", "CalculateSMMA", "CalculateLWMA",
    ]);

    // Event handlers
    set.extend([
        "OnCalculate", "OnInit", "OnDeinit", "OnTick", "OnTimer", "OnChartEvent", "OnBookEvent",
        "OnTrade", "OnTradeTransaction", "OnTester", "OnTesterInit", "OnTesterDeinit",
        "OnTesterPass", "OnStart",
    ]);

    set
});

/// Builtin functions that exist only in MQL4.
pub static MQL4_FUNCTIONS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    let mut set = HashSet::new();

    // Order pool
    set.extend([
        "OrderClose", "OrderModify", "OrderDelete", "OrderTicket", "OrderType", "OrderLots",
        "OrderOpenPrice", "OrderClosePrice", "OrderStopLoss", "OrderTakeProfit", "OrderSymbol",
        "OrderMagicNumber", "OrderProfit", "OrderSwap", "OrderCommission", "MarketInfo",
        "OrderCloseBy",
    ]);

    // Indicator setup
    set.extend([
        "SetIndexStyle", "SetIndexLabel", "SetIndexEmptyValue", "SetIndexArrow",
        "SetIndexDrawBegin", "SetIndexShift", "IndicatorShortName", "IndicatorDigits",
        "IndicatorBuffers", "IndicatorCounted", "SetLevelValue", "SetLevelStyle",
        "SetLevelColor",
    ]);

    // Windows
    set.extend([
        "RefreshRates", "WindowFind", "WindowHandle", "WindowIsVisible", "WindowOnDropped",
        "WindowPriceMax", "WindowPriceMin", "WindowPriceOnDropped", "WindowRedraw",
        "WindowScreenShot", "WindowTimeOnDropped", "WindowXOnDropped", "WindowYOnDropped",
    ]);

    // Time and strings
    set.extend([
        "TimeToStr", "Day", "Month", "Year", "Hour", "Minute", "Seconds", "DayOfWeek",
        "DayOfYear", "StringGetChar", "StringSetChar",
    ]);

    // Objects
    set.extend([
        "ObjectType", "ObjectDescription", "ObjectGetFiboDescription", "ObjectGetShiftByValue",
        "ObjectGetValueByShift",
    ]);

    // Account
    set.extend([
        "AccountBalance", "AccountCredit", "AccountCompany", "AccountCurrency", "AccountEquity",
        "AccountFreeMargin", "AccountFreeMarginCheck", "AccountFreeMarginMode",
        "AccountLeverage", "AccountMargin", "AccountName", "AccountNumber", "AccountProfit",
        "AccountServer", "AccountStopoutLevel", "AccountStopoutMode",
    ]);

    set
});

/// Builtin functions that exist only in MQL5.
pub static MQL5_FUNCTIONS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    let mut set = HashSet::new();

    // Orders, positions and history
    set.extend([
        "OrderSendAsync", "OrderCheck", "OrderCalcMargin", "OrderCalcProfit", "OrderGetDouble",
        "OrderGetInteger", "OrderGetString", "OrderGetTicket", "PositionSelect", "PositionOpen",
        "PositionClose", "PositionModify", "PositionGetDouble", "PositionGetInteger",
        "PositionGetString", "PositionGetSymbol", "PositionGetTicket", "PositionsTotal",
        "HistorySelect", "HistorySelectByPosition", "HistoryOrderSelect",
        "HistoryOrderGetDouble", "HistoryOrderGetInteger", "HistoryOrderGetString",
        "HistoryOrderGetTicket", "HistoryOrdersTotal", "HistoryDealSelect",
        "HistoryDealGetDouble", "HistoryDealGetInteger", "HistoryDealGetString",
        "HistoryDealGetTicket", "HistoryDealsTotal",
    ]);

    // Indicator handles and plots
    set.extend([
        "iDEMA", "iFrAMA", "iAMA", "iVIDyA", "IndicatorCreate", "IndicatorRelease",
        "IndicatorParameters", "PlotIndexSetInteger", "PlotIndexSetDouble", "PlotIndexSetString",
        "PlotIndexGetInteger", "PlotIndexGetDouble", "PlotIndexGetString", "CopyBuffer",
        "CopyTickVolume", "CopyRealVolume", "CopySpread", "ChartIndicatorAdd",
        "ChartIndicatorGet",
    ]);

    // Arrays and time
    set.extend([
        "ArrayInsert", "ArrayRemove", "ArrayReverse", "ArrayPrint", "TimeTradeServer",
    ]);

    set
});
